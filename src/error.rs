//! Errors returned by the [`TrackerList`](crate::list::TrackerList).
//!
//! Error | Context | Description
//! ---|---|---
//! `PositionOutOfRange` | Reordering, outcome recording | The position does not reference a tracker in the list. Positions are only valid until the next reordering call.
//! `EndpointOutOfRange` | Announce selection | The tracker has no endpoint at the given index.
//!
//! Both are caller-contract violations: the list is left untouched.
use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("tracker position {position} is out of range, the list has {len} trackers, {location}")]
    PositionOutOfRange {
        position: usize,
        len: usize,
        location: &'static Location<'static>,
    },

    #[error("tracker {tracker} has no endpoint {endpoint}, {location}")]
    EndpointOutOfRange {
        tracker: usize,
        endpoint: usize,
        location: &'static Location<'static>,
    },
}
