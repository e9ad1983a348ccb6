//! The tracker description a client hands over to the tracker list.
//!
//! A sample entry, as it would come from the `announce-list` of a torrent
//! file ([BEP 12](https://www.bittorrent.org/beps/bep_0012.html)):
//!
//! ```rust
//! use torrust_tracker_list_primitives::announce_entry::AnnounceEntry;
//! use torrust_tracker_list_primitives::source::TrackerSource;
//!
//! let entry = AnnounceEntry::new("udp://tracker.example.com:6969/announce")
//!     .with_tier(1)
//!     .with_source(TrackerSource::TORRENT);
//!
//! assert_eq!(entry.tier, 1);
//! ```
use serde::{Deserialize, Serialize};

use crate::source::TrackerSource;

/// A tracker URL plus the metadata the client knows about it before the
/// first announce.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnnounceEntry {
    /// Tracker announce URL. Entries with an empty URL are ignored.
    pub url: String,
    /// Tracker id returned by a previous announce, if any.
    #[serde(default)]
    pub trackerid: String,
    /// Lower tiers are tried first.
    #[serde(default)]
    pub tier: u8,
    /// Number of consecutive failures after which the tracker is no longer
    /// announced to. `0` means no limit.
    #[serde(default)]
    pub fail_limit: u8,
    #[serde(default)]
    pub source: TrackerSource,
}

impl AnnounceEntry {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_tier(mut self, tier: u8) -> Self {
        self.tier = tier;
        self
    }

    #[must_use]
    pub fn with_fail_limit(mut self, fail_limit: u8) -> Self {
        self.fail_limit = fail_limit;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: TrackerSource) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn with_trackerid(mut self, trackerid: impl Into<String>) -> Self {
        self.trackerid = trackerid.into();
        self
    }
}
