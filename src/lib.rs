//! **Torrust Tracker List** is the tracker list manager of a `BitTorrent`
//! client: the ordered, tiered collection of trackers a torrent announces to,
//! as described in the [Multitracker Metadata Extension](https://www.bittorrent.org/beps/bep_0012.html).
//!
//! # Table of contents
//!
//! - [Overview](#overview)
//! - [Tiers](#tiers)
//! - [Reordering](#reordering)
//! - [Announce state](#announce-state)
//! - [Configuration](#configuration)
//! - [Logging](#logging)
//!
//! # Overview
//!
//! A torrent learns tracker URLs from its torrent file, its magnet link, the
//! user, and other peers. The [`TrackerList`] keeps them without
//! duplicates, ordered by tier, and with an index from URL to position.
//!
//! ```rust
//! use torrust_tracker_list::TrackerList;
//! use torrust_tracker_list_primitives::announce_entry::AnnounceEntry;
//!
//! let mut list = TrackerList::new();
//!
//! list.replace(&[
//!     AnnounceEntry::new("http://a.example.com/announce").with_tier(1),
//!     AnnounceEntry::new("http://b.example.com/announce").with_tier(1),
//!     AnnounceEntry::new("http://c.example.com/announce").with_tier(0),
//! ]);
//!
//! assert_eq!(list[0].url(), "http://c.example.com/announce");
//! assert_eq!(list.find("http://b.example.com/announce"), Some(2));
//! ```
//!
//! # Tiers
//!
//! Lower tiers are preferred. Trackers added one by one with
//! [`TrackerList::add_tracker`] are placed after every tracker of the same
//! or a lower tier. A URL that is already in the list is not added again;
//! only its source flags are merged.
//!
//! # Reordering
//!
//! Trackers are identified by their position, which is only valid until the
//! next reordering call:
//!
//! - [`TrackerList::deprioritize_tracker`] moves a failing tracker behind
//!   the rest of its tier.
//! - [`TrackerList::prioritize_udp_trackers`] moves UDP trackers in front of
//!   the HTTP trackers on the same host.
//!
//! # Announce state
//!
//! Every tracker has one [`AnnounceEndpoint`](entry::endpoint::AnnounceEndpoint)
//! per local listen socket, and every endpoint keeps the announce state of the
//! v1 and v2 info-hashes. The list applies bulk transitions to that state
//! ([`completed`](TrackerList::completed),
//! [`stop_announcing`](TrackerList::stop_announcing),
//! [`reset`](TrackerList::reset), ...) and selects which trackers are due with
//! [`announce_targets`](TrackerList::announce_targets).
//!
//! # Configuration
//!
//! The announce selection policy and the logging threshold are loaded with
//! the [`torrust_tracker_list_configuration`] package. See
//! [`bootstrap::config`].
//!
//! # Logging
//!
//! The crate emits [`tracing`] events. [`bootstrap::logging::setup`] installs
//! a subscriber for applications that don't have their own.
use std::sync::Arc;

pub mod bootstrap;
pub mod entry;
pub mod error;
pub mod list;

pub use list::selection::AnnounceTarget;
pub use list::{TrackerList, TrackerListSync};

pub type TrackerListMutexParkingLot = Arc<parking_lot::Mutex<TrackerList>>;
