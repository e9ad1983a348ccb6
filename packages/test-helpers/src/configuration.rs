//! Tracker list configuration factories for testing.
use torrust_tracker_list_configuration::{AnnouncePolicy, Configuration, Threshold};

/// This configuration is used for testing. Logging is disabled so tests
/// don't fight over the global subscriber.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    config
}

/// Ephemeral configuration that announces to one tracker of every tier.
#[must_use]
pub fn ephemeral_announcing_to_all_tiers() -> Configuration {
    let mut config = ephemeral();

    config.announce_policy = AnnouncePolicy {
        announce_to_all_tiers: true,
        ..AnnouncePolicy::default()
    };

    config
}

/// Ephemeral configuration that announces to every tracker in the list.
#[must_use]
pub fn ephemeral_announcing_to_all_trackers() -> Configuration {
    let mut config = ephemeral();

    config.announce_policy = AnnouncePolicy {
        announce_to_all_tiers: true,
        announce_to_all_trackers: true,
        ..AnnouncePolicy::default()
    };

    config
}
