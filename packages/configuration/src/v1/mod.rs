//! Version `1` for [Torrust Tracker List](https://docs.rs/torrust-tracker-list)
//! configuration data structures.
//!
//! The configuration has two sections:
//!
//! - [`logging`]: the tracing threshold and output style.
//! - [`announce_policy`]: how the tracker list is walked and how failing
//!   trackers are backed off.
//!
//! The default configuration is:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//! style = "full"
//!
//! [announce_policy]
//! announce_to_all_tiers = false
//! announce_to_all_trackers = false
//! tracker_backoff = 250
//! retry_delay_min = 5
//! retry_delay_max = 3600
//! ```
//!
//! Every value has a default, so an empty document is a valid configuration.
pub mod announce_policy;
pub mod logging;

use std::fs;
use std::panic::Location;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::announce_policy::AnnouncePolicy;
use self::logging::Logging;
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Tracker list configuration.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// Tracker selection and back-off configuration.
    #[serde(default)]
    pub announce_policy: AnnouncePolicy,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct. The whole
    /// configuration in TOML format is taken from the `TORRUST_TRACKER_LIST_CONFIG_TOML`
    /// environment variable when present, and from the configuration file
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the TOML can't be read or has a bad configuration.
    #[track_caller]
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let location = Location::caller();

        match &info.config_toml {
            Some(config_toml) => {
                let figment = Self::defaults().merge(Toml::string(config_toml)).merge(Self::overrides());

                figment.extract().map_err(|err| Error::UnableToLoadFromEnvironmentVariable {
                    source: Box::new(err),
                    location,
                })
            }
            None => {
                let figment = Self::defaults()
                    .merge(Toml::file(&info.config_toml_path))
                    .merge(Self::overrides());

                figment.extract().map_err(|err| Error::UnableToLoadFromConfigFile {
                    source: Box::new(err),
                    location,
                })
            }
        }
    }

    /// Loads the configuration from the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if `path` has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let figment = Self::defaults().merge(Toml::file(path)).merge(Self::overrides());

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Saves the configuration to the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can't be encoded to TOML or
    /// the file can't be written.
    #[track_caller]
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        let location = Location::caller();

        let toml = self.to_toml()?;

        fs::write(path, toml).map_err(|source| Error::UnableToWrite {
            path: path.to_owned(),
            source,
            location,
        })
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can't be encoded.
    #[track_caller]
    pub fn to_toml(&self) -> Result<String, Error> {
        let location = Location::caller();

        toml::to_string(self).map_err(|source| Error::UnableToEncode { source, location })
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Configuration::default()))
    }

    fn overrides() -> Env {
        Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR)
    }
}
