//! Primitive types for the [Torrust Tracker List](https://docs.rs/torrust-tracker-list).
//!
//! This package contains the basic data structures shared by the tracker
//! list packages. A tracker list is the ordered collection of trackers a
//! `BitTorrent` client announces to for a single torrent. These structures
//! are what the client feeds into the list (trackers learned from a torrent
//! file, a magnet link, the user or a peer) and what the list hands back to
//! the transport layer.
use std::time::Duration;

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod announce_entry;
pub mod announce_event;
pub mod source;
pub mod url;

/// Duration since the Unix Epoch.
///
/// `Duration::ZERO` is used as the "never scheduled" time point.
pub type DurationSinceUnixEpoch = Duration;

/// The `BitTorrent` protocol version an info-hash belongs to.
///
/// Hybrid torrents have both a v1 (SHA-1) and a v2 (SHA-256) info-hash and
/// the client keeps a separate announce state for each of them.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtocolVersion {
    #[display("v1")]
    V1,
    #[display("v2")]
    V2,
}

impl ProtocolVersion {
    /// Every supported version, in announce order.
    pub const ALL: [ProtocolVersion; 2] = [ProtocolVersion::V1, ProtocolVersion::V2];

    /// Number of supported protocol versions.
    pub const COUNT: usize = 2;

    /// Slot of this version in per-version arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            ProtocolVersion::V1 => 0,
            ProtocolVersion::V2 => 1,
        }
    }
}
