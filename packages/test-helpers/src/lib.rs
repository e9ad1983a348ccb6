//! Testing helpers for [Torrust Tracker List](https://docs.rs/torrust-tracker-list).
//!
//! It includes:
//!
//! - Configuration for tests.
//! - Random data generators for tracker URLs and announce entries.
pub mod configuration;
pub mod random;
