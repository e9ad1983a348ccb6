use std::time::Duration;

use rstest::{fixture, rstest};
use torrust_tracker_list::{TrackerList, TrackerListMutexParkingLot};
use torrust_tracker_list_configuration::AnnouncePolicy;
use torrust_tracker_list_primitives::announce_entry::AnnounceEntry;
use torrust_tracker_list_primitives::announce_event::AnnounceEvent;
use torrust_tracker_list_primitives::source::TrackerSource;
use torrust_tracker_list_primitives::ProtocolVersion;
use torrust_tracker_list_test_helpers::{configuration, random};

use crate::common::fixtures::{ipv4_listen_socket, ipv6_listen_socket, now, torrent_file_trackers};
use crate::common::list::List;

#[fixture]
fn single() -> List {
    List::Single(TrackerList::default())
}

#[fixture]
fn mutex_parking_lot() -> List {
    List::MutexParkingLot(TrackerListMutexParkingLot::from(TrackerList::default()))
}

#[fixture]
fn policy_first_tracker() -> AnnouncePolicy {
    configuration::ephemeral().announce_policy
}

#[fixture]
fn policy_all_tiers() -> AnnouncePolicy {
    configuration::ephemeral_announcing_to_all_tiers().announce_policy
}

#[fixture]
fn policy_all_trackers() -> AnnouncePolicy {
    configuration::ephemeral_announcing_to_all_trackers().announce_policy
}

pub enum Makes {
    Empty,
    TorrentFile,
    Random,
}

fn make(list: &mut List, makes: &Makes) {
    match makes {
        Makes::Empty => {}
        Makes::TorrentFile => list.replace(&torrent_file_trackers()),
        Makes::Random => list.replace(&random::announce_entries(50, 5)),
    }
}

#[rstest]
#[case::empty(&Makes::Empty)]
#[case::torrent_file(&Makes::TorrentFile)]
#[case::random(&Makes::Random)]
fn it_should_keep_the_index_consistent_with_the_positions(
    #[values(single(), mutex_parking_lot())] mut list: List,
    #[case] makes: &Makes,
) {
    make(&mut list, makes);

    let snapshot = list.snapshot();

    assert!(snapshot.is_consistent());
    assert!(snapshot.is_sorted_by_tier());

    for (position, tracker) in snapshot.iter().enumerate() {
        assert_eq!(list.find(tracker.url()), Some(position));
    }
}

#[rstest]
#[case::empty(&Makes::Empty)]
#[case::torrent_file(&Makes::TorrentFile)]
#[case::random(&Makes::Random)]
fn adding_a_tracker_should_keep_the_list_sorted_by_tier(
    #[values(single(), mutex_parking_lot())] mut list: List,
    #[case] makes: &Makes,
) {
    make(&mut list, makes);
    let before = list.len();

    for entry in random::announce_entries(20, 5) {
        assert!(list.add_tracker(&entry));
    }
    assert!(list.add_tracker(&AnnounceEntry::new(random::tracker_url("udp")).with_tier(2)));

    let snapshot = list.snapshot();

    assert_eq!(list.len(), before + 21);
    assert!(snapshot.is_sorted_by_tier());
    assert!(snapshot.is_consistent());
}

#[rstest]
#[case::torrent_file(&Makes::TorrentFile)]
#[case::random(&Makes::Random)]
fn adding_every_tracker_again_should_not_change_the_list(
    #[values(single(), mutex_parking_lot())] mut list: List,
    #[case] makes: &Makes,
) {
    make(&mut list, makes);
    let urls = list.urls();

    for url in &urls {
        assert!(!list.add_tracker(&AnnounceEntry::new(url.clone()).with_tier(0)));
    }

    assert_eq!(list.urls(), urls);
}

#[rstest]
fn a_tracker_learned_from_a_peer_should_keep_its_torrent_file_origin(#[values(single(), mutex_parking_lot())] mut list: List) {
    make(&mut list, &Makes::TorrentFile);

    list.add_tracker(&AnnounceEntry::new("http://tracker.example.com/announce").with_source(TrackerSource::TEX));

    let tracker = list.tracker("http://tracker.example.com/announce").unwrap();
    assert!(tracker.source.contains(TrackerSource::TORRENT | TrackerSource::TEX));
}

#[rstest]
fn replacing_with_an_empty_url_should_skip_it(#[values(single(), mutex_parking_lot())] mut list: List) {
    list.replace(&[
        AnnounceEntry::new("http://a.example.com/announce"),
        AnnounceEntry::new(""),
        AnnounceEntry::new("http://b.example.com/announce"),
    ]);

    assert_eq!(list.len(), 2);
    assert!(!list.add_tracker(&AnnounceEntry::new("")));
}

#[rstest]
#[case::torrent_file(&Makes::TorrentFile)]
#[case::random(&Makes::Random)]
fn deprioritizing_a_tracker_repeatedly_should_settle_it_at_the_end_of_its_tier(
    #[values(single(), mutex_parking_lot())] mut list: List,
    #[case] makes: &Makes,
) {
    make(&mut list, makes);
    let snapshot = list.snapshot();
    let url = snapshot[0].url().to_owned();
    let tier = snapshot[0].tier();
    let last_of_tier = snapshot.iter().rposition(|tracker| tracker.tier() == tier).unwrap();

    let mut position = 0;
    for _ in 0..3 {
        position = list.deprioritize_tracker(position).unwrap();
    }

    assert_eq!(position, last_of_tier);
    assert_eq!(list.find(&url), Some(last_of_tier));
    assert!(list.snapshot().is_sorted_by_tier());
    assert!(list.snapshot().is_consistent());
}

#[rstest]
fn the_udp_tracker_should_be_tried_before_the_http_tracker_on_the_same_host(
    #[values(single(), mutex_parking_lot())] mut list: List,
) {
    make(&mut list, &Makes::TorrentFile);

    list.prioritize_udp_trackers();

    assert_eq!(
        list.urls(),
        vec![
            "http://tracker.example.org/announce",
            "udp://tracker.example.com:6969/announce",
            "https://backup.example.net/announce",
            "http://tracker.example.com/announce",
        ]
    );
    assert_eq!(list.tracker("udp://tracker.example.com:6969/announce").unwrap().tier(), 0);
    assert_eq!(list.tracker("http://tracker.example.com/announce").unwrap().tier(), 1);
    assert!(list.snapshot().is_consistent());
}

#[rstest]
fn prioritizing_udp_trackers_again_should_not_move_them_back(#[values(single(), mutex_parking_lot())] mut list: List) {
    make(&mut list, &Makes::TorrentFile);
    let urls = list.urls();

    list.prioritize_udp_trackers();
    list.prioritize_udp_trackers();

    // The HTTP tracker is now behind the UDP one, so the second call finds no match.
    assert_ne!(list.urls(), urls);
    assert_eq!(list.urls()[1], "udp://tracker.example.com:6969/announce");
}

#[rstest]
fn the_last_working_tracker_should_survive_reordering(#[values(single(), mutex_parking_lot())] mut list: List) {
    make(&mut list, &Makes::TorrentFile);
    let position = list.find("http://tracker.example.com/announce").unwrap();
    list.record_working(position).unwrap();

    list.deprioritize_tracker(0).unwrap();
    list.prioritize_udp_trackers();
    list.add_tracker(&AnnounceEntry::new("http://first.example.com/announce").with_tier(0));

    assert_eq!(list.last_working_url().as_deref(), Some("http://tracker.example.com/announce"));
    assert!(list.snapshot().is_consistent());
}

#[rstest]
fn a_tracker_that_should_not_be_tried_again_should_be_skipped_after_its_next_failure(
    #[values(single(), mutex_parking_lot())] mut list: List,
    policy_first_tracker: AnnouncePolicy,
) {
    make(&mut list, &Makes::TorrentFile);
    list.add_endpoint(ipv4_listen_socket(), false);

    list.dont_try_again(0).unwrap();
    list.modify(|list| {
        list.get_mut(0).unwrap().endpoints[0]
            .info_hash_mut(ProtocolVersion::V1)
            .failed(&policy_first_tracker, Duration::ZERO, Duration::ZERO);
    });

    let targets = list.announce_targets(now(), false, &[ProtocolVersion::V1], &policy_first_tracker);

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].tracker, 1);
}

#[rstest]
#[case::first_tracker(policy_first_tracker(), 1)]
#[case::all_tiers(policy_all_tiers(), 2)]
#[case::all_trackers(policy_all_trackers(), 4)]
fn the_announce_policy_should_decide_how_many_trackers_are_used(
    #[values(single(), mutex_parking_lot())] mut list: List,
    #[case] policy: AnnouncePolicy,
    #[case] expected: usize,
) {
    make(&mut list, &Makes::TorrentFile);
    list.add_endpoint(ipv4_listen_socket(), false);

    let targets = list.announce_targets(now(), false, &[ProtocolVersion::V1], &policy);

    assert_eq!(targets.len(), expected);
    assert!(targets.iter().all(|target| target.event == AnnounceEvent::Started));
}

#[rstest]
fn a_full_announce_cycle(#[values(single(), mutex_parking_lot())] mut list: List, policy_first_tracker: AnnouncePolicy) {
    make(&mut list, &Makes::TorrentFile);
    list.add_endpoint(ipv4_listen_socket(), false);
    list.add_endpoint(ipv6_listen_socket(), false);

    let targets = list.announce_targets(now(), false, &ProtocolVersion::ALL, &policy_first_tracker);
    assert_eq!(targets.len(), 4);

    for target in &targets {
        list.begin_announce(target, now()).unwrap();
    }

    assert!(list
        .announce_targets(now(), false, &ProtocolVersion::ALL, &policy_first_tracker)
        .is_empty());

    list.modify(|list| {
        for target in &targets {
            list.announce_state_mut(target).unwrap().succeeded(
                target.event,
                Duration::from_secs(1800),
                Duration::from_secs(60),
                now(),
            );
        }
        list.get_mut(0).unwrap().verified = true;
    });
    list.record_working(0).unwrap();

    assert!(list.any_verified());
    assert_eq!(list.last_working_url().as_deref(), Some("http://tracker.example.org/announce"));

    // The download finishes: the completed event is due right away.
    list.completed(now() + Duration::from_secs(120));

    let targets = list.announce_targets(now() + Duration::from_secs(120), true, &[ProtocolVersion::V1], &policy_first_tracker);
    assert_eq!(targets.len(), 2);
    assert!(targets.iter().all(|target| target.event == AnnounceEvent::Completed));

    list.set_complete_sent();
    list.stop_announcing(now() + Duration::from_secs(130));
    list.reset();
    list.enable_all();

    let snapshot = list.snapshot();
    assert!(!snapshot.any_verified());
    assert!(snapshot
        .iter()
        .flat_map(|tracker| tracker.endpoints.iter())
        .all(|endpoint| endpoint.enabled && endpoint.is_working()));
    assert!(snapshot.is_consistent());
}
