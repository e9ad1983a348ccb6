//! Announce state of one info-hash on one tracker endpoint.
use std::time::Duration;

use torrust_tracker_list_configuration::AnnouncePolicy;
use torrust_tracker_list_primitives::announce_event::AnnounceEvent;
use torrust_tracker_list_primitives::DurationSinceUnixEpoch;

/// Consecutive failures are counted up to this value.
pub const MAX_FAILS: u8 = 127;

/// Slack applied to `next_announce` so that rounding in the caller's timer
/// doesn't postpone an announce by a whole scheduling round.
const NEXT_ANNOUNCE_SLACK: Duration = Duration::from_secs(1);

/// Scheduling and result data for announcing one info-hash (v1 or v2) to one
/// tracker from one local endpoint.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnounceInfoHash {
    /// Warning message returned by the tracker, if any.
    pub message: String,
    /// Error of the last failed announce.
    pub last_error: Option<String>,
    /// When the next regular announce is due.
    pub next_announce: DurationSinceUnixEpoch,
    /// Announces before this time point are not allowed (the tracker's
    /// `min interval`).
    pub min_announce: DurationSinceUnixEpoch,
    /// Scrape counters reported by the tracker.
    pub scrape_incomplete: Option<u32>,
    pub scrape_complete: Option<u32>,
    pub scrape_downloaded: Option<u32>,
    /// Consecutive failed announces.
    pub fails: u8,
    /// An announce is in flight.
    pub updating: bool,
    /// The tracker acknowledged a `started` event.
    pub start_sent: bool,
    /// The tracker acknowledged a `completed` event.
    pub complete_sent: bool,
}

impl AnnounceInfoHash {
    #[must_use]
    pub fn new(complete_sent: bool) -> Self {
        Self {
            complete_sent,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn is_working(&self) -> bool {
        self.fails == 0
    }

    /// Returns `true` if an announce can be sent now.
    ///
    /// A seed that still owes the tracker a `completed` event may announce
    /// before `min_announce`. A `fail_limit` of `0` means the tracker is
    /// never given up on.
    #[must_use]
    pub fn can_announce(&self, now: DurationSinceUnixEpoch, is_seed: bool, fail_limit: u8) -> bool {
        let need_send_complete = is_seed && !self.complete_sent;

        now + NEXT_ANNOUNCE_SLACK >= self.next_announce
            && (now >= self.min_announce || need_send_complete)
            && (fail_limit == 0 || self.fails < fail_limit)
            && !self.updating
    }

    /// The event the next regular announce should carry.
    #[must_use]
    pub fn next_event(&self, is_seed: bool) -> AnnounceEvent {
        if !self.start_sent {
            AnnounceEvent::Started
        } else if is_seed && !self.complete_sent {
            AnnounceEvent::Completed
        } else {
            AnnounceEvent::None
        }
    }

    /// Records a failed announce and schedules the retry with an exponential
    /// back-off.
    pub fn failed(&mut self, policy: &AnnouncePolicy, retry_interval: Duration, now: DurationSinceUnixEpoch) {
        if self.fails < MAX_FAILS {
            self.fails += 1;
        }

        self.next_announce = now + policy.retry_delay(self.fails, retry_interval);
        self.updating = false;
    }

    /// Records a successful announce of `event`.
    pub fn succeeded(&mut self, event: AnnounceEvent, interval: Duration, min_interval: Duration, now: DurationSinceUnixEpoch) {
        self.fails = 0;
        self.updating = false;
        self.last_error = None;
        self.next_announce = now + interval;
        self.min_announce = now + min_interval;

        match event {
            AnnounceEvent::Started => self.start_sent = true,
            AnnounceEvent::Completed => {
                self.start_sent = true;
                self.complete_sent = true;
            }
            AnnounceEvent::Stopped => self.start_sent = false,
            AnnounceEvent::None => {}
        }
    }

    /// Back to the state of a tracker that was never announced to.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
