//! The tiered tracker list of a torrent
//! ([BEP 12](https://www.bittorrent.org/beps/bep_0012.html)).
//!
//! The list keeps the trackers ordered by tier (lower tiers first) and an
//! index from URL to position. Both views share the same storage and every
//! mutating operation keeps them in sync:
//!
//! - for every position `i`, the index maps the URL of the tracker at `i` to `i`,
//! - the index has exactly one slot per tracker,
//! - the last working tracker, when set, is a valid position.
//!
//! [`TrackerList::is_consistent`] evaluates those conditions and it's
//! asserted after every mutation in debug builds.
//!
//! Trackers are identified by their position. A position is only valid until
//! the next call that reorders the list ([`TrackerList::add_tracker`],
//! [`TrackerList::replace`], [`TrackerList::deprioritize_tracker`] and
//! [`TrackerList::prioritize_udp_trackers`]). Callers must resolve it again
//! with [`TrackerList::find`] after any of them.
//!
//! The operations are split in submodules:
//!
//! - [`ordering`]: demotion of failing trackers and promotion of UDP trackers.
//! - [`scheduling`]: bulk announce state transitions.
//! - [`selection`]: which trackers to announce to next.
//! - [`mutex_parking_lot`]: the list shared between threads.
use std::collections::HashMap;
use std::net::SocketAddr;
use std::ops::Index;
use std::panic::Location;

use torrust_tracker_list_configuration::AnnouncePolicy;
use torrust_tracker_list_primitives::announce_entry::AnnounceEntry;
use torrust_tracker_list_primitives::{DurationSinceUnixEpoch, ProtocolVersion};
use tracing::{debug, warn};

use self::selection::AnnounceTarget;
use crate::entry::TrackerEntry;
use crate::error::Error;

pub mod mutex_parking_lot;
pub mod ordering;
pub mod scheduling;
pub mod selection;

/// The ordered, deduplicated trackers of one torrent.
#[derive(Clone, Debug, Default)]
pub struct TrackerList {
    trackers: Vec<TrackerEntry>,
    url_index: HashMap<String, usize>,
    last_working: Option<usize>,
}

impl TrackerList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The position of the tracker with the given URL.
    #[must_use]
    pub fn find(&self, url: &str) -> Option<usize> {
        self.url_index.get(url).copied()
    }

    #[must_use]
    pub fn find_tracker(&self, url: &str) -> Option<&TrackerEntry> {
        self.find(url).and_then(|position| self.trackers.get(position))
    }

    pub fn find_tracker_mut(&mut self, url: &str) -> Option<&mut TrackerEntry> {
        self.find(url).and_then(|position| self.trackers.get_mut(position))
    }

    /// Adds a tracker after every tracker with the same or a lower tier.
    ///
    /// It returns `false` if the URL is empty or already in the list. In the
    /// latter case the source of the new entry is merged into the existing
    /// tracker, but its tier and the rest of its metadata are ignored.
    pub fn add_tracker(&mut self, entry: &AnnounceEntry) -> bool {
        if entry.url.is_empty() {
            return false;
        }

        if let Some(existing) = self.url_index.get(&entry.url).and_then(|&p| self.trackers.get_mut(p)) {
            existing.source |= entry.source;
            debug!(url = %entry.url, source = %existing.source, "tracker already in the list, source merged");
            return false;
        }

        let insert_at = self.trackers.partition_point(|tracker| tracker.tier <= entry.tier);

        self.trackers.insert(insert_at, TrackerEntry::from(entry));
        self.url_index.insert(entry.url.clone(), insert_at);
        self.reindex_from(insert_at + 1);

        if let Some(last_working) = self.last_working {
            if insert_at <= last_working {
                self.last_working = Some(last_working + 1);
            }
        }

        debug!(url = %entry.url, tier = entry.tier, position = insert_at, "tracker added");
        debug_assert!(self.is_consistent());

        true
    }

    /// Replaces the whole list.
    ///
    /// Empty URLs are skipped and the sources of repeated URLs are merged
    /// into their first occurrence. The result is sorted by tier, keeping the
    /// input order of trackers in the same tier. The last working tracker is
    /// forgotten.
    pub fn replace(&mut self, entries: &[AnnounceEntry]) {
        self.trackers.clear();
        self.url_index.clear();
        self.last_working = None;

        for entry in entries {
            if entry.url.is_empty() {
                continue;
            }

            if let Some(existing) = self.url_index.get(&entry.url).and_then(|&p| self.trackers.get_mut(p)) {
                existing.source |= entry.source;
                continue;
            }

            self.url_index.insert(entry.url.clone(), self.trackers.len());
            self.trackers.push(TrackerEntry::from(entry));
        }

        // `sort_by_key` is stable: same-tier trackers keep the input order.
        self.trackers.sort_by_key(TrackerEntry::tier);
        self.reindex_from(0);

        debug!(trackers = self.trackers.len(), "tracker list replaced");
        debug_assert!(self.is_consistent());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackerEntry> {
        self.trackers.iter()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&TrackerEntry> {
        self.trackers.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut TrackerEntry> {
        self.trackers.get_mut(position)
    }

    /// `true` if at least one tracker was verified.
    #[must_use]
    pub fn any_verified(&self) -> bool {
        self.trackers.iter().any(|tracker| tracker.verified)
    }

    /// The position of the last tracker that answered an announce.
    #[must_use]
    pub fn last_working(&self) -> Option<usize> {
        self.last_working
    }

    #[must_use]
    pub fn last_working_url(&self) -> Option<&str> {
        self.last_working
            .and_then(|position| self.trackers.get(position))
            .map(TrackerEntry::url)
    }

    /// `true` if the trackers are sorted by tier.
    ///
    /// This holds after [`add_tracker`](Self::add_tracker) and
    /// [`replace`](Self::replace), but not necessarily after
    /// [`prioritize_udp_trackers`](Self::prioritize_udp_trackers).
    #[must_use]
    pub fn is_sorted_by_tier(&self) -> bool {
        self.trackers.windows(2).all(|pair| pair[0].tier <= pair[1].tier)
    }

    /// Checks the structural invariants of the list: the URL index matches
    /// the positions, every tracker has a URL, and the last working
    /// tracker is a valid position.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.url_index.len() == self.trackers.len()
            && self
                .trackers
                .iter()
                .enumerate()
                .all(|(position, tracker)| !tracker.url().is_empty() && self.url_index.get(tracker.url()) == Some(&position))
            && self.last_working.map_or(true, |position| position < self.trackers.len())
    }

    /// Swaps two trackers and their index slots. The last working tracker
    /// follows its URL.
    fn swap_entries(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        self.trackers.swap(a, b);

        for position in [a, b] {
            if let Some(slot) = self.url_index.get_mut(self.trackers[position].url()) {
                *slot = position;
            }
        }

        self.last_working = match self.last_working {
            Some(position) if position == a => Some(b),
            Some(position) if position == b => Some(a),
            other => other,
        };
    }

    fn reindex_from(&mut self, start: usize) {
        for (position, tracker) in self.trackers.iter().enumerate().skip(start) {
            match self.url_index.get_mut(tracker.url()) {
                Some(slot) => *slot = position,
                None => {
                    self.url_index.insert(tracker.url().to_owned(), position);
                }
            }
        }
    }

    /// Fails for positions outside the list. In debug builds it panics too.
    #[track_caller]
    fn check_position(&self, position: usize) -> Result<(), Error> {
        let result = self.position_in_range(position);

        if let Err(err) = &result {
            warn!(%err, "tracker position out of range");
            debug_assert!(position < self.trackers.len(), "{err}");
        }

        result
    }

    #[track_caller]
    fn position_in_range(&self, position: usize) -> Result<(), Error> {
        let len = self.trackers.len();

        if position < len {
            return Ok(());
        }

        Err(Error::PositionOutOfRange {
            position,
            len,
            location: Location::caller(),
        })
    }
}

/// The tracker list operations for a list shared between threads. Every
/// call takes the lock once.
#[allow(clippy::module_name_repetitions)]
pub trait TrackerListSync {
    fn find(&self, url: &str) -> Option<usize>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn add_tracker(&self, entry: &AnnounceEntry) -> bool;
    fn replace(&self, entries: &[AnnounceEntry]);
    /// # Errors
    ///
    /// Will return `Err` if `position` is not in the list.
    fn deprioritize_tracker(&self, position: usize) -> Result<usize, Error>;
    /// # Errors
    ///
    /// Will return `Err` if `position` is not in the list.
    fn dont_try_again(&self, position: usize) -> Result<(), Error>;
    fn prioritize_udp_trackers(&self);
    /// # Errors
    ///
    /// Will return `Err` if `position` is not in the list.
    fn record_working(&self, position: usize) -> Result<(), Error>;
    fn completed(&self, now: DurationSinceUnixEpoch);
    fn set_complete_sent(&self);
    fn stop_announcing(&self, now: DurationSinceUnixEpoch);
    fn reset(&self);
    fn enable_all(&self);
    fn add_endpoint(&self, local_endpoint: SocketAddr, complete_sent: bool);
    fn remove_endpoint(&self, local_endpoint: &SocketAddr);
    fn any_verified(&self) -> bool;
    fn last_working_url(&self) -> Option<String>;
    fn announce_targets(
        &self,
        now: DurationSinceUnixEpoch,
        is_seed: bool,
        versions: &[ProtocolVersion],
        policy: &AnnouncePolicy,
    ) -> Vec<AnnounceTarget>;
    /// # Errors
    ///
    /// Will return `Err` if the target doesn't exist anymore.
    fn begin_announce(&self, target: &AnnounceTarget, now: DurationSinceUnixEpoch) -> Result<(), Error>;
    /// A copy of the list, to inspect it without holding the lock.
    fn snapshot(&self) -> TrackerList;
}

impl Index<usize> for TrackerList {
    type Output = TrackerEntry;

    fn index(&self, position: usize) -> &Self::Output {
        &self.trackers[position]
    }
}

impl<'a> IntoIterator for &'a TrackerList {
    type Item = &'a TrackerEntry;
    type IntoIter = std::slice::Iter<'a, TrackerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.trackers.iter()
    }
}
