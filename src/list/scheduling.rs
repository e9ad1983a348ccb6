//! Announce outcomes and bulk announce state transitions.
//!
//! These operations never reorder the list.
use std::net::SocketAddr;

use torrust_tracker_list_primitives::DurationSinceUnixEpoch;
use tracing::trace;

use super::TrackerList;
use crate::entry::info_hash::AnnounceInfoHash;
use crate::error::Error;

impl TrackerList {
    /// Remembers the tracker that answered the last announce.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `position` is not in the list.
    ///
    /// # Panics
    ///
    /// In debug builds, it panics if `position` is not in the list.
    #[track_caller]
    pub fn record_working(&mut self, position: usize) -> Result<(), Error> {
        self.check_position(position)?;

        self.last_working = Some(position);

        Ok(())
    }

    /// The torrent finished downloading: every enabled endpoint that has not
    /// sent the `completed` event yet is scheduled right away.
    pub fn completed(&mut self, now: DurationSinceUnixEpoch) {
        for tracker in &mut self.trackers {
            for endpoint in tracker.endpoints.iter_mut().filter(|endpoint| endpoint.enabled) {
                for info_hash in endpoint.info_hashes.iter_mut().filter(|info_hash| !info_hash.complete_sent) {
                    info_hash.next_announce = now;
                    info_hash.min_announce = now;
                }
            }
        }

        trace!(trackers = self.trackers.len(), "completed announces scheduled");
    }

    /// Marks the `completed` event as sent everywhere.
    pub fn set_complete_sent(&mut self) {
        self.for_each_info_hash(|info_hash| info_hash.complete_sent = true);
    }

    /// Schedules every endpoint, enabled or not, at `now`. It's used to send
    /// the `stopped` event when the torrent is stopped.
    pub fn stop_announcing(&mut self, now: DurationSinceUnixEpoch) {
        self.for_each_info_hash(|info_hash| {
            info_hash.next_announce = now;
            info_hash.min_announce = now;
        });

        trace!(trackers = self.trackers.len(), "stopped announces scheduled");
    }

    /// Forgets every announce result. Order, tiers and URLs stay.
    pub fn reset(&mut self) {
        for tracker in &mut self.trackers {
            tracker.reset();
        }

        trace!(trackers = self.trackers.len(), "tracker list reset");
    }

    /// Enables every endpoint of every tracker.
    pub fn enable_all(&mut self) {
        for endpoint in self.trackers.iter_mut().flat_map(|tracker| tracker.endpoints.iter_mut()) {
            endpoint.enabled = true;
        }
    }

    /// Adds an endpoint for a new local listen socket to every tracker.
    pub fn add_endpoint(&mut self, local_endpoint: SocketAddr, complete_sent: bool) {
        let added = self
            .trackers
            .iter_mut()
            .map(|tracker| tracker.add_endpoint(local_endpoint, complete_sent))
            .filter(|added| *added)
            .count();

        trace!(%local_endpoint, added, "listen socket added");
    }

    /// Removes the endpoint of a closed local listen socket from every tracker.
    pub fn remove_endpoint(&mut self, local_endpoint: &SocketAddr) {
        let removed = self
            .trackers
            .iter_mut()
            .map(|tracker| tracker.remove_endpoint(local_endpoint))
            .filter(|removed| *removed)
            .count();

        trace!(%local_endpoint, removed, "listen socket removed");
    }

    fn for_each_info_hash(&mut self, mut f: impl FnMut(&mut AnnounceInfoHash)) {
        for endpoint in self.trackers.iter_mut().flat_map(|tracker| tracker.endpoints.iter_mut()) {
            endpoint.info_hashes.iter_mut().for_each(&mut f);
        }
    }
}
