use std::net::SocketAddr;

use torrust_tracker_list::entry::TrackerEntry;
use torrust_tracker_list::error::Error;
use torrust_tracker_list::{AnnounceTarget, TrackerList, TrackerListMutexParkingLot, TrackerListSync as _};
use torrust_tracker_list_configuration::AnnouncePolicy;
use torrust_tracker_list_primitives::announce_entry::AnnounceEntry;
use torrust_tracker_list_primitives::{DurationSinceUnixEpoch, ProtocolVersion};

/// The same operations on a plain list and on a list behind a lock.
#[derive(Debug, Clone)]
pub(crate) enum List {
    Single(TrackerList),
    MutexParkingLot(TrackerListMutexParkingLot),
}

impl List {
    /// A copy of the current list, for assertions.
    pub(crate) fn snapshot(&self) -> TrackerList {
        match self {
            List::Single(list) => list.clone(),
            List::MutexParkingLot(list) => list.snapshot(),
        }
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.snapshot().iter().map(|tracker| tracker.url().to_owned()).collect()
    }

    pub(crate) fn tracker(&self, url: &str) -> Option<TrackerEntry> {
        self.snapshot().find_tracker(url).cloned()
    }

    pub(crate) fn find(&self, url: &str) -> Option<usize> {
        match self {
            List::Single(list) => list.find(url),
            List::MutexParkingLot(list) => list.find(url),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            List::Single(list) => list.len(),
            List::MutexParkingLot(list) => list.len(),
        }
    }

    pub(crate) fn add_tracker(&mut self, entry: &AnnounceEntry) -> bool {
        match self {
            List::Single(list) => list.add_tracker(entry),
            List::MutexParkingLot(list) => list.add_tracker(entry),
        }
    }

    pub(crate) fn replace(&mut self, entries: &[AnnounceEntry]) {
        match self {
            List::Single(list) => list.replace(entries),
            List::MutexParkingLot(list) => list.replace(entries),
        }
    }

    pub(crate) fn deprioritize_tracker(&mut self, position: usize) -> Result<usize, Error> {
        match self {
            List::Single(list) => list.deprioritize_tracker(position),
            List::MutexParkingLot(list) => list.deprioritize_tracker(position),
        }
    }

    pub(crate) fn dont_try_again(&mut self, position: usize) -> Result<(), Error> {
        match self {
            List::Single(list) => list.dont_try_again(position),
            List::MutexParkingLot(list) => list.dont_try_again(position),
        }
    }

    pub(crate) fn prioritize_udp_trackers(&mut self) {
        match self {
            List::Single(list) => list.prioritize_udp_trackers(),
            List::MutexParkingLot(list) => list.prioritize_udp_trackers(),
        }
    }

    pub(crate) fn record_working(&mut self, position: usize) -> Result<(), Error> {
        match self {
            List::Single(list) => list.record_working(position),
            List::MutexParkingLot(list) => list.record_working(position),
        }
    }

    pub(crate) fn last_working_url(&self) -> Option<String> {
        match self {
            List::Single(list) => list.last_working_url().map(ToOwned::to_owned),
            List::MutexParkingLot(list) => list.last_working_url(),
        }
    }

    pub(crate) fn completed(&mut self, now: DurationSinceUnixEpoch) {
        match self {
            List::Single(list) => list.completed(now),
            List::MutexParkingLot(list) => list.completed(now),
        }
    }

    pub(crate) fn set_complete_sent(&mut self) {
        match self {
            List::Single(list) => list.set_complete_sent(),
            List::MutexParkingLot(list) => list.set_complete_sent(),
        }
    }

    pub(crate) fn stop_announcing(&mut self, now: DurationSinceUnixEpoch) {
        match self {
            List::Single(list) => list.stop_announcing(now),
            List::MutexParkingLot(list) => list.stop_announcing(now),
        }
    }

    pub(crate) fn reset(&mut self) {
        match self {
            List::Single(list) => list.reset(),
            List::MutexParkingLot(list) => list.reset(),
        }
    }

    pub(crate) fn enable_all(&mut self) {
        match self {
            List::Single(list) => list.enable_all(),
            List::MutexParkingLot(list) => list.enable_all(),
        }
    }

    pub(crate) fn add_endpoint(&mut self, local_endpoint: SocketAddr, complete_sent: bool) {
        match self {
            List::Single(list) => list.add_endpoint(local_endpoint, complete_sent),
            List::MutexParkingLot(list) => list.add_endpoint(local_endpoint, complete_sent),
        }
    }

    pub(crate) fn any_verified(&self) -> bool {
        match self {
            List::Single(list) => list.any_verified(),
            List::MutexParkingLot(list) => list.any_verified(),
        }
    }

    pub(crate) fn announce_targets(
        &self,
        now: DurationSinceUnixEpoch,
        is_seed: bool,
        versions: &[ProtocolVersion],
        policy: &AnnouncePolicy,
    ) -> Vec<AnnounceTarget> {
        match self {
            List::Single(list) => list.announce_targets(now, is_seed, versions, policy),
            List::MutexParkingLot(list) => list.announce_targets(now, is_seed, versions, policy),
        }
    }

    pub(crate) fn begin_announce(&mut self, target: &AnnounceTarget, now: DurationSinceUnixEpoch) -> Result<(), Error> {
        match self {
            List::Single(list) => list.begin_announce(target, now),
            List::MutexParkingLot(list) => list.begin_announce(target, now),
        }
    }

    /// Applies a change directly to the trackers, for setting up scenarios.
    pub(crate) fn modify(&mut self, f: impl FnOnce(&mut TrackerList)) {
        match self {
            List::Single(list) => f(list),
            List::MutexParkingLot(list) => f(&mut list.lock()),
        }
    }
}
