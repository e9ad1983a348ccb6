//! Tracker URL helpers.
//!
//! The tracker list only needs two things from a tracker URL: whether it
//! uses the UDP tracker protocol and which host it points to. Everything
//! else is left to the transport.
use std::panic::Location;

use thiserror::Error;

const UDP_SCHEME_PREFIX: &str = "udp://";

/// The parts of a tracker URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: String,
    /// `user:password` (or just `user`), empty when absent.
    pub auth: String,
    /// Lowercase and, for domains, in its ASCII form, whatever the scheme.
    pub host: String,
    /// Explicit port, or the scheme default for `http` and `https`.
    pub port: Option<u16>,
    pub path: String,
}

/// Errors returned by [`parse_url_components`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseUrlError {
    #[error("invalid tracker url {url}: {reason}, {location}")]
    Invalid {
        url: String,
        reason: String,
        location: &'static Location<'static>,
    },

    #[error("tracker url {url} has no host, {location}")]
    MissingHost {
        url: String,
        location: &'static Location<'static>,
    },
}

/// Splits a tracker URL into its components.
///
/// # Errors
///
/// Will return an error if the URL can't be parsed or if it doesn't have a host.
#[track_caller]
pub fn parse_url_components(url: &str) -> Result<UrlComponents, ParseUrlError> {
    let location = Location::caller();

    let parsed = ::url::Url::parse(url).map_err(|err| ParseUrlError::Invalid {
        url: url.to_owned(),
        reason: err.to_string(),
        location,
    })?;

    let Some(host) = parsed.host_str().filter(|host| !host.is_empty()) else {
        return Err(ParseUrlError::MissingHost {
            url: url.to_owned(),
            location,
        });
    };

    let auth = match parsed.password() {
        Some(password) => format!("{}:{password}", parsed.username()),
        None => parsed.username().to_owned(),
    };

    Ok(UrlComponents {
        scheme: parsed.scheme().to_owned(),
        auth,
        host: normalize_host(host),
        port: parsed.port_or_known_default(),
        path: parsed.path().to_owned(),
    })
}

/// `url` only normalizes the hosts of the schemes it knows. The host of a
/// `udp` URL is left as written, percent-encoded.
fn normalize_host(host: &str) -> String {
    ::url::Host::parse(host).map_or_else(|_| host.to_ascii_lowercase(), |host| host.to_string())
}

/// Returns `true` for URLs using the UDP tracker protocol ([BEP 15](https://www.bittorrent.org/beps/bep_0015.html)).
#[must_use]
pub fn is_udp_tracker(url: &str) -> bool {
    url.starts_with(UDP_SCHEME_PREFIX)
}

/// The host of a tracker URL, or `None` when the URL can't be parsed.
#[must_use]
pub fn hostname(url: &str) -> Option<String> {
    parse_url_components(url).ok().map(|components| components.host)
}
