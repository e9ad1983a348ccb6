//! The tracker record kept by the [`TrackerList`](crate::list::TrackerList).
//!
//! A [`TrackerEntry`] is created from the [`AnnounceEntry`] the client
//! supplies and then accumulates the announce state of every local
//! endpoint:
//!
//! ```text
//! TrackerEntry (url, tier, fail_limit, source, verified)
//! └── AnnounceEndpoint (one per local listen socket)
//!     ├── AnnounceInfoHash v1
//!     └── AnnounceInfoHash v2
//! ```
//!
//! The URL and the tier can only be changed by the list, because the list
//! keeps an index by URL and keeps its entries ordered by tier.
use std::net::SocketAddr;

use torrust_tracker_list_primitives::announce_entry::AnnounceEntry;
use torrust_tracker_list_primitives::source::TrackerSource;

pub mod endpoint;
pub mod info_hash;

use self::endpoint::AnnounceEndpoint;

/// A tracker in the tracker list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerEntry {
    url: String,
    pub(crate) tier: u8,
    /// Tracker id to send back to the tracker.
    pub trackerid: String,
    pub endpoints: Vec<AnnounceEndpoint>,
    /// Consecutive failures after which the tracker is not announced to
    /// anymore. `0` means no limit.
    pub fail_limit: u8,
    pub source: TrackerSource,
    /// The tracker's responses were confirmed to be authoritative for this
    /// torrent.
    pub verified: bool,
}

impl TrackerEntry {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            tier: 0,
            trackerid: String::new(),
            endpoints: Vec::new(),
            fail_limit: 0,
            source: TrackerSource::CLIENT,
            verified: false,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn tier(&self) -> u8 {
        self.tier
    }

    #[must_use]
    pub fn find_endpoint(&self, local_endpoint: &SocketAddr) -> Option<&AnnounceEndpoint> {
        self.endpoints.iter().find(|e| e.local_endpoint == *local_endpoint)
    }

    pub fn find_endpoint_mut(&mut self, local_endpoint: &SocketAddr) -> Option<&mut AnnounceEndpoint> {
        self.endpoints.iter_mut().find(|e| e.local_endpoint == *local_endpoint)
    }

    /// Adds an endpoint for the local listen socket, unless there is one
    /// already. Returns `true` if it was added.
    pub fn add_endpoint(&mut self, local_endpoint: SocketAddr, complete_sent: bool) -> bool {
        if self.find_endpoint(&local_endpoint).is_some() {
            return false;
        }

        self.endpoints.push(AnnounceEndpoint::new(local_endpoint, complete_sent));
        true
    }

    /// Removes the endpoint of a listen socket. Returns `true` if there was one.
    pub fn remove_endpoint(&mut self, local_endpoint: &SocketAddr) -> bool {
        let before = self.endpoints.len();
        self.endpoints.retain(|e| e.local_endpoint != *local_endpoint);
        self.endpoints.len() != before
    }

    /// `true` unless an enabled endpoint failed its last announce.
    #[must_use]
    pub fn is_working(&self) -> bool {
        self.endpoints.iter().filter(|e| e.enabled).all(AnnounceEndpoint::is_working)
    }

    /// Forgets all announce results. Endpoints, URL, tier and the other
    /// metadata stay.
    pub fn reset(&mut self) {
        self.verified = false;

        for endpoint in &mut self.endpoints {
            endpoint.reset();
        }
    }
}

impl From<&AnnounceEntry> for TrackerEntry {
    fn from(entry: &AnnounceEntry) -> Self {
        Self {
            url: entry.url.clone(),
            tier: entry.tier,
            trackerid: entry.trackerid.clone(),
            endpoints: Vec::new(),
            fail_limit: entry.fail_limit,
            source: if entry.source.is_empty() {
                TrackerSource::CLIENT
            } else {
                entry.source
            },
            verified: false,
        }
    }
}
