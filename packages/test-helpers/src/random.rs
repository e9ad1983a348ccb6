use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use torrust_tracker_list_primitives::announce_entry::AnnounceEntry;

/// Returns a random alphanumeric string of a certain size.
#[must_use]
pub fn string(size: usize) -> String {
    thread_rng().sample_iter(&Alphanumeric).take(size).map(char::from).collect()
}

/// Returns a random tracker announce URL with the given scheme, for example:
/// `udp://q7xk2m0a.example.com/announce`.
#[must_use]
pub fn tracker_url(scheme: &str) -> String {
    format!("{scheme}://{}.example.com/announce", string(8).to_lowercase())
}

/// Returns `count` entries with distinct random URLs and random tiers below `tiers`.
///
/// # Panics
///
/// Will panic if `tiers` is zero.
#[must_use]
pub fn announce_entries(count: usize, tiers: u8) -> Vec<AnnounceEntry> {
    assert!(tiers > 0, "there should be at least one tier");

    let mut rng = thread_rng();

    (0..count)
        .map(|i| {
            let scheme = if rng.gen_bool(0.5) { "udp" } else { "http" };
            let url = format!("{scheme}://{i}-{}.example.com/announce", string(6).to_lowercase());
            AnnounceEntry::new(url).with_tier(rng.gen_range(0..tiers))
        })
        .collect()
}
