//! Which trackers to announce to next
//! ([BEP 12](https://www.bittorrent.org/beps/bep_0012.html)).
//!
//! The list is walked in order once per local listen socket and protocol
//! version. By default the walk stops at the first working tracker it
//! announces to, so failing trackers are only skipped over until a tier with
//! a working tracker is found. The [`AnnouncePolicy`] can widen the walk:
//!
//! `announce_to_all_tiers` | `announce_to_all_trackers` | Trackers used
//! ---|---|---
//! `false` | `false` | The first working one.
//! `true` | `false` | One per tier.
//! `false` | `true` | All trackers of the first tier with a working tracker.
//! `true` | `true` | All of them.
use std::collections::HashMap;
use std::net::SocketAddr;
use std::panic::Location;

use torrust_tracker_list_configuration::AnnouncePolicy;
use torrust_tracker_list_primitives::announce_event::AnnounceEvent;
use torrust_tracker_list_primitives::{DurationSinceUnixEpoch, ProtocolVersion};
use tracing::trace;

use super::TrackerList;
use crate::entry::info_hash::AnnounceInfoHash;
use crate::error::Error;

/// An announce the client should send now.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AnnounceTarget {
    /// Position of the tracker in the list.
    pub tracker: usize,
    /// Index of the endpoint in the tracker's endpoints.
    pub endpoint: usize,
    pub version: ProtocolVersion,
    pub event: AnnounceEvent,
}

/// Progress of the walk for one listen socket and protocol version.
#[derive(Default)]
struct WalkState {
    /// Tier of the last working tracker seen. `None` until there is one.
    tier: Option<u8>,
    sent_announce: bool,
    done: bool,
}

impl TrackerList {
    /// The announces due at `now`, in list order.
    ///
    /// `versions` are the protocol versions of the torrent's info-hashes.
    /// It doesn't change the list: call [`begin_announce`](Self::begin_announce)
    /// for every target actually sent.
    #[must_use]
    pub fn announce_targets(
        &self,
        now: DurationSinceUnixEpoch,
        is_seed: bool,
        versions: &[ProtocolVersion],
        policy: &AnnouncePolicy,
    ) -> Vec<AnnounceTarget> {
        let first_only = !policy.announce_to_all_tiers && !policy.announce_to_all_trackers;
        let one_per_tier = policy.announce_to_all_tiers && !policy.announce_to_all_trackers;

        let mut walks: HashMap<(SocketAddr, ProtocolVersion), WalkState> = HashMap::new();
        let mut targets = vec![];

        for (position, tracker) in self.trackers.iter().enumerate() {
            for (index, endpoint) in tracker.endpoints.iter().enumerate() {
                if !endpoint.enabled {
                    continue;
                }

                for &version in versions {
                    let walk = walks.entry((endpoint.local_endpoint, version)).or_default();

                    if walk.done {
                        continue;
                    }

                    // Already announced in this tier.
                    if one_per_tier && walk.sent_announce && walk.tier.is_some_and(|tier| tracker.tier <= tier) {
                        continue;
                    }

                    // A lower tier has a working tracker.
                    if !policy.announce_to_all_tiers && walk.sent_announce && walk.tier.is_some_and(|tier| tracker.tier > tier) {
                        continue;
                    }

                    let info_hash = endpoint.info_hash(version);

                    if info_hash.is_working() {
                        walk.tier = Some(tracker.tier);
                        walk.sent_announce = false;
                    }

                    if !info_hash.can_announce(now, is_seed, tracker.fail_limit) {
                        // A working tracker that is just not due yet still
                        // counts as announced to.
                        if info_hash.is_working() {
                            walk.sent_announce = true;
                            walk.done = first_only;
                        }
                        continue;
                    }

                    targets.push(AnnounceTarget {
                        tracker: position,
                        endpoint: index,
                        version,
                        event: info_hash.next_event(is_seed),
                    });

                    walk.tier = Some(tracker.tier);
                    walk.sent_announce = true;
                    walk.done = first_only && info_hash.is_working();
                }
            }
        }

        trace!(targets = targets.len(), "announce targets selected");

        targets
    }

    /// The announce state of a target.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the tracker or its endpoint doesn't exist anymore.
    #[track_caller]
    pub fn announce_state_mut(&mut self, target: &AnnounceTarget) -> Result<&mut AnnounceInfoHash, Error> {
        let location = Location::caller();

        self.check_position(target.tracker)?;

        self.trackers[target.tracker]
            .endpoints
            .get_mut(target.endpoint)
            .map(|endpoint| endpoint.info_hash_mut(target.version))
            .ok_or(Error::EndpointOutOfRange {
                tracker: target.tracker,
                endpoint: target.endpoint,
                location,
            })
    }

    /// Marks the announce of a target as in flight.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the tracker or its endpoint doesn't exist anymore.
    #[track_caller]
    pub fn begin_announce(&mut self, target: &AnnounceTarget, now: DurationSinceUnixEpoch) -> Result<(), Error> {
        let info_hash = self.announce_state_mut(target)?;

        info_hash.updating = true;
        info_hash.next_announce = now;
        info_hash.min_announce = now;

        Ok(())
    }
}
