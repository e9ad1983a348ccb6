use std::time::Duration;

use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// How the client walks the tracker list
/// ([BEP 12](https://www.bittorrent.org/beps/bep_0012.html)) and how it backs
/// off from failing trackers.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Constructor)]
pub struct AnnouncePolicy {
    /// Announce to one tracker in every tier instead of stopping at the
    /// first tier with a working tracker.
    #[serde(default = "AnnouncePolicy::default_announce_to_all_tiers")]
    pub announce_to_all_tiers: bool,

    /// Announce to every tracker in the list. When enabled together with
    /// `announce_to_all_tiers` every tracker of every tier is used.
    #[serde(default = "AnnouncePolicy::default_announce_to_all_trackers")]
    pub announce_to_all_trackers: bool,

    /// Back-off factor, in percent, applied to the retry delay of a failing
    /// tracker. It's multiplied by the square of the number of consecutive
    /// failures.
    #[serde(default = "AnnouncePolicy::default_tracker_backoff")]
    pub tracker_backoff: u32,

    /// Shortest retry delay after a failed announce, in seconds.
    #[serde(default = "AnnouncePolicy::default_retry_delay_min")]
    pub retry_delay_min: u64,

    /// Longest retry delay after a failed announce, in seconds.
    #[serde(default = "AnnouncePolicy::default_retry_delay_max")]
    pub retry_delay_max: u64,
}

impl Default for AnnouncePolicy {
    fn default() -> Self {
        Self {
            announce_to_all_tiers: Self::default_announce_to_all_tiers(),
            announce_to_all_trackers: Self::default_announce_to_all_trackers(),
            tracker_backoff: Self::default_tracker_backoff(),
            retry_delay_min: Self::default_retry_delay_min(),
            retry_delay_max: Self::default_retry_delay_max(),
        }
    }
}

impl AnnouncePolicy {
    fn default_announce_to_all_tiers() -> bool {
        false
    }

    fn default_announce_to_all_trackers() -> bool {
        false
    }

    fn default_tracker_backoff() -> u32 {
        250
    }

    fn default_retry_delay_min() -> u64 {
        5
    }

    fn default_retry_delay_max() -> u64 {
        60 * 60
    }

    /// The delay before retrying a tracker that failed `fails` times in a row.
    ///
    /// It's never shorter than the `retry_interval` the tracker asked for.
    #[must_use]
    pub fn retry_delay(&self, fails: u8, retry_interval: Duration) -> Duration {
        let fails = u64::from(fails);
        let backoff = (fails * fails)
            .saturating_mul(self.retry_delay_min)
            .saturating_mul(u64::from(self.tracker_backoff))
            / 100;
        let delay = Duration::from_secs(self.retry_delay_min.saturating_add(backoff).min(self.retry_delay_max));

        delay.max(retry_interval)
    }
}
