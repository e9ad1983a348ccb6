//! Reordering of the tracker list.
//!
//! Both algorithms move trackers with [`TrackerList::swap_entries`], so the
//! URL index and the last working tracker always follow the moved URLs.
use torrust_tracker_list_primitives::url::{hostname, is_udp_tracker};
use tracing::debug;

use super::TrackerList;
use crate::error::Error;

impl TrackerList {
    /// Moves a tracker behind the other trackers of its tier, so they are
    /// tried before it is retried. It never leaves its tier.
    ///
    /// Returns the new position of the tracker.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `position` is not in the list. The list is not
    /// changed.
    ///
    /// # Panics
    ///
    /// In debug builds, it panics if `position` is not in the list.
    #[track_caller]
    pub fn deprioritize_tracker(&mut self, position: usize) -> Result<usize, Error> {
        self.check_position(position)?;

        let tier = self.trackers[position].tier;
        let mut current = position;

        while self.trackers.get(current + 1).is_some_and(|next| next.tier == tier) {
            self.swap_entries(current, current + 1);
            current += 1;
        }

        debug!(url = %self.trackers[current].url(), from = position, to = current, "tracker deprioritized");
        debug_assert!(self.is_consistent());

        Ok(current)
    }

    /// The next failure of the tracker will be its last one.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `position` is not in the list.
    ///
    /// # Panics
    ///
    /// In debug builds, it panics if `position` is not in the list.
    #[track_caller]
    pub fn dont_try_again(&mut self, position: usize) -> Result<(), Error> {
        self.check_position(position)?;

        self.trackers[position].fail_limit = 1;

        Ok(())
    }

    /// Moves every UDP tracker in front of the first earlier non-UDP tracker
    /// on the same host. The two trackers also exchange their tiers.
    ///
    /// A UDP tracker is swapped at most once per call. URLs that can't be
    /// parsed never match.
    ///
    /// After this call the list is not necessarily sorted by tier anymore.
    pub fn prioritize_udp_trackers(&mut self) {
        for udp in 0..self.trackers.len() {
            if !is_udp_tracker(self.trackers[udp].url()) {
                continue;
            }

            let Some(host) = hostname(self.trackers[udp].url()) else {
                continue;
            };

            let same_host = self.trackers[..udp].iter().position(|tracker| {
                !is_udp_tracker(tracker.url()) && hostname(tracker.url()).is_some_and(|other| other == host)
            });

            if let Some(other) = same_host {
                let udp_tier = self.trackers[udp].tier;
                self.trackers[udp].tier = self.trackers[other].tier;
                self.trackers[other].tier = udp_tier;

                self.swap_entries(other, udp);

                debug!(url = %self.trackers[other].url(), from = udp, to = other, "udp tracker prioritized");
            }
        }

        debug_assert!(self.is_consistent());
    }
}
