//! Configuration data structures for the [Torrust Tracker List](https://docs.rs/torrust-tracker-list).
//!
//! The tracker list itself is a plain in-memory structure, but the way a
//! client walks it (how many tiers and trackers it announces to, and how
//! fast it backs off from a failing tracker) is configurable.
//!
//! The current version for configuration is [`v1`].
//!
//! Configuration is loaded from a TOML document. Any value can be
//! overridden with an environment variable using the
//! `TORRUST_TRACKER_LIST_CONFIG_OVERRIDE_` prefix and a double underscore
//! between sections:
//!
//! ```text
//! TORRUST_TRACKER_LIST_CONFIG_OVERRIDE_ANNOUNCE_POLICY__TRACKER_BACKOFF=100
//! ```
pub mod v1;

use std::env;
use std::panic::Location;

use thiserror::Error;

// Environment variables

/// The whole `tracker_list.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
const ENV_VAR_CONFIG_TOML: &str = "TORRUST_TRACKER_LIST_CONFIG_TOML";

/// The `tracker_list.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TORRUST_TRACKER_LIST_CONFIG_TOML_PATH";

/// Prefix for the environment variables that override single values.
pub const CONFIG_OVERRIDE_PREFIX: &str = "TORRUST_TRACKER_LIST_CONFIG_OVERRIDE_";

/// Path separator in the override variable names.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type AnnouncePolicy = v1::announce_policy::AnnouncePolicy;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type Style = v1::logging::Style;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info from the environment, falling back to
    /// `default_config_toml_path` when no path is set.
    #[must_use]
    pub fn new(default_config_toml_path: &str) -> Self {
        let config_toml = env::var(ENV_VAR_CONFIG_TOML).ok();

        let config_toml_path = env::var(ENV_VAR_CONFIG_TOML_PATH).unwrap_or_else(|_| default_config_toml_path.to_owned());

        Self {
            config_toml,
            config_toml_path,
        }
    }

    /// Info for an in-memory TOML document.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: String::new(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Unable to load the configuration from the environment variable.
    #[error("Unable to load from Environmental Variable: {source}, {location}")]
    UnableToLoadFromEnvironmentVariable {
        source: Box<figment::Error>,
        location: &'static Location<'static>,
    },

    /// Unable to load the configuration from the configuration file.
    #[error("Unable to load from Config File: {source}, {location}")]
    UnableToLoadFromConfigFile {
        source: Box<figment::Error>,
        location: &'static Location<'static>,
    },

    /// The configuration was found but it's not valid.
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        source: Box<figment::Error>,
        location: &'static Location<'static>,
    },

    /// The configuration can't be written as TOML.
    #[error("Failed encoding the configuration: {source}, {location}")]
    UnableToEncode {
        source: toml::ser::Error,
        location: &'static Location<'static>,
    },

    /// The configuration file can't be written.
    #[error("Failed writing the configuration file {path}: {source}, {location}")]
    UnableToWrite {
        path: String,
        source: std::io::Error,
        location: &'static Location<'static>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: Box::new(err),
            location: Location::caller(),
        }
    }
}
