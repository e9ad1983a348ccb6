//! Bootstrapping of a client using the tracker list.
//!
//! The list itself needs no setup. These functions load the configuration
//! that drives the announce selection and install the logging subscriber.
pub mod config;
pub mod logging;
