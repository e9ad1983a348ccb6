use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The event a client attaches to an announce request. Described on the
/// [BEP 3. The `BitTorrent` Protocol Specification](https://www.bittorrent.org/beps/bep_0003.html)
///
/// The numeric codes are the ones used by the UDP tracker protocol
/// ([BEP 15](https://www.bittorrent.org/beps/bep_0015.html)).
#[derive(Hash, Clone, Copy, Debug, Display, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AnnounceEvent {
    /// A regular, periodic announce.
    #[default]
    #[display("")]
    None,
    /// The download finished. Sent once per tracker.
    #[display("completed")]
    Completed,
    /// First announce to a tracker.
    #[display("started")]
    Started,
    /// The client is leaving the swarm.
    #[display("stopped")]
    Stopped,
}

impl AnnounceEvent {
    #[inline]
    #[must_use]
    pub fn from_i32(i: i32) -> Self {
        match i {
            1 => Self::Completed,
            2 => Self::Started,
            3 => Self::Stopped,
            _ => Self::None,
        }
    }

    #[inline]
    #[must_use]
    pub fn to_i32(&self) -> i32 {
        match self {
            AnnounceEvent::None => 0,
            AnnounceEvent::Completed => 1,
            AnnounceEvent::Started => 2,
            AnnounceEvent::Stopped => 3,
        }
    }
}
