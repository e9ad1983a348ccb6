//! Where a tracker URL was learned from.
//!
//! The same URL can reach the client through several channels, so the
//! source is a bitmask and adding a known URL again only merges the bits.
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Bitmask of tracker origins.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TrackerSource(u8);

impl TrackerSource {
    /// No origin recorded.
    pub const NONE: TrackerSource = TrackerSource(0);
    /// The tracker is listed in the torrent file.
    pub const TORRENT: TrackerSource = TrackerSource(1);
    /// Added by the client itself (user edit or client default).
    pub const CLIENT: TrackerSource = TrackerSource(2);
    /// Part of the magnet link.
    pub const MAGNET_LINK: TrackerSource = TrackerSource(4);
    /// Received from a peer through the tracker exchange extension.
    pub const TEX: TrackerSource = TrackerSource(8);

    const NAMES: [(TrackerSource, &'static str); 4] = [
        (TrackerSource::TORRENT, "torrent"),
        (TrackerSource::CLIENT, "client"),
        (TrackerSource::MAGNET_LINK, "magnet_link"),
        (TrackerSource::TEX, "tex"),
    ];

    const ALL_BITS: u8 = 0b1111;

    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Builds a mask from raw bits, dropping the unknown ones.
    #[must_use]
    pub fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[must_use]
    pub fn contains(self, other: TrackerSource) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for TrackerSource {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TrackerSource {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for TrackerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        if names.is_empty() {
            return f.write_str("none");
        }

        f.write_str(&names.join("|"))
    }
}
