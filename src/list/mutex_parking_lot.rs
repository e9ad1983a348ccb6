use std::net::SocketAddr;
use std::sync::Arc;

use torrust_tracker_list_configuration::AnnouncePolicy;
use torrust_tracker_list_primitives::announce_entry::AnnounceEntry;
use torrust_tracker_list_primitives::{DurationSinceUnixEpoch, ProtocolVersion};

use super::selection::AnnounceTarget;
use super::{TrackerList, TrackerListSync};
use crate::error::Error;
use crate::TrackerListMutexParkingLot;

impl TrackerListSync for TrackerListMutexParkingLot {
    fn find(&self, url: &str) -> Option<usize> {
        self.lock().find(url)
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn add_tracker(&self, entry: &AnnounceEntry) -> bool {
        self.lock().add_tracker(entry)
    }

    fn replace(&self, entries: &[AnnounceEntry]) {
        self.lock().replace(entries);
    }

    #[track_caller]
    fn deprioritize_tracker(&self, position: usize) -> Result<usize, Error> {
        self.lock().deprioritize_tracker(position)
    }

    #[track_caller]
    fn dont_try_again(&self, position: usize) -> Result<(), Error> {
        self.lock().dont_try_again(position)
    }

    fn prioritize_udp_trackers(&self) {
        self.lock().prioritize_udp_trackers();
    }

    #[track_caller]
    fn record_working(&self, position: usize) -> Result<(), Error> {
        self.lock().record_working(position)
    }

    fn completed(&self, now: DurationSinceUnixEpoch) {
        self.lock().completed(now);
    }

    fn set_complete_sent(&self) {
        self.lock().set_complete_sent();
    }

    fn stop_announcing(&self, now: DurationSinceUnixEpoch) {
        self.lock().stop_announcing(now);
    }

    fn reset(&self) {
        self.lock().reset();
    }

    fn enable_all(&self) {
        self.lock().enable_all();
    }

    fn add_endpoint(&self, local_endpoint: SocketAddr, complete_sent: bool) {
        self.lock().add_endpoint(local_endpoint, complete_sent);
    }

    fn remove_endpoint(&self, local_endpoint: &SocketAddr) {
        self.lock().remove_endpoint(local_endpoint);
    }

    fn any_verified(&self) -> bool {
        self.lock().any_verified()
    }

    fn last_working_url(&self) -> Option<String> {
        self.lock().last_working_url().map(ToOwned::to_owned)
    }

    fn announce_targets(
        &self,
        now: DurationSinceUnixEpoch,
        is_seed: bool,
        versions: &[ProtocolVersion],
        policy: &AnnouncePolicy,
    ) -> Vec<AnnounceTarget> {
        self.lock().announce_targets(now, is_seed, versions, policy)
    }

    #[track_caller]
    fn begin_announce(&self, target: &AnnounceTarget, now: DurationSinceUnixEpoch) -> Result<(), Error> {
        self.lock().begin_announce(target, now)
    }

    fn snapshot(&self) -> TrackerList {
        self.lock().clone()
    }
}

impl From<TrackerList> for TrackerListMutexParkingLot {
    fn from(list: TrackerList) -> Self {
        Arc::new(parking_lot::Mutex::new(list))
    }
}
