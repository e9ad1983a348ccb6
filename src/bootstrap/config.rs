//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `TORRUST_TRACKER_LIST_`.
use torrust_tracker_list_configuration::{Configuration, Error, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/tracker_list.toml";

/// It loads the configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `tracker_list.toml`.
/// 2. Environment variable: `TORRUST_TRACKER_LIST_CONFIG_TOML`. The variable contains the same contents as the `tracker_list.toml` file.
///
/// Environment variable has priority over the config file.
///
/// Refer to the [configuration documentation](https://docs.rs/torrust-tracker-list-configuration) for the configuration options.
///
/// # Errors
///
/// Will return `Err` if it can't load the configuration from either
/// the config file or the env var `TORRUST_TRACKER_LIST_CONFIG_TOML`.
pub fn initialize_configuration() -> Result<Configuration, Error> {
    let info = Info::new(DEFAULT_PATH_CONFIG);

    Configuration::load(&info)
}
