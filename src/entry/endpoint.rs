use std::net::SocketAddr;

use torrust_tracker_list_primitives::ProtocolVersion;

use super::info_hash::AnnounceInfoHash;

/// A tracker as seen from one local listen socket.
///
/// The client announces to every tracker once per listen socket (for
/// example once over IPv4 and once over IPv6), and once per info-hash
/// version on each of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceEndpoint {
    pub local_endpoint: SocketAddr,
    /// Disabled endpoints are not announced from.
    pub enabled: bool,
    pub info_hashes: [AnnounceInfoHash; ProtocolVersion::COUNT],
}

impl AnnounceEndpoint {
    /// A new enabled endpoint. Torrents that are already complete start
    /// with `complete_sent` so they never send a `completed` event.
    #[must_use]
    pub fn new(local_endpoint: SocketAddr, complete_sent: bool) -> Self {
        Self {
            local_endpoint,
            enabled: true,
            info_hashes: [AnnounceInfoHash::new(complete_sent), AnnounceInfoHash::new(complete_sent)],
        }
    }

    #[must_use]
    pub fn info_hash(&self, version: ProtocolVersion) -> &AnnounceInfoHash {
        &self.info_hashes[version.index()]
    }

    pub fn info_hash_mut(&mut self, version: ProtocolVersion) -> &mut AnnounceInfoHash {
        &mut self.info_hashes[version.index()]
    }

    /// `true` if no info-hash failed its last announce.
    #[must_use]
    pub fn is_working(&self) -> bool {
        self.info_hashes.iter().all(AnnounceInfoHash::is_working)
    }

    pub fn reset(&mut self) {
        for info_hash in &mut self.info_hashes {
            info_hash.reset();
        }
    }
}
