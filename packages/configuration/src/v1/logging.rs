use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Logging {
    /// Logging level. Possible values are: `off`, `error`, `warn`, `info`,
    /// `debug` and `trace`. Default is `info`.
    #[serde(default = "Logging::default_threshold")]
    pub threshold: Threshold,

    /// Output format: `full`, `pretty`, `compact` or `json`. Default is
    /// `full`.
    #[serde(default = "Logging::default_style")]
    pub style: Style,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            style: Self::default_style(),
        }
    }
}

impl Logging {
    fn default_threshold() -> Threshold {
        Threshold::Info
    }

    fn default_style() -> Style {
        Style::Full
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Threshold {
    /// A threshold lower than all security levels.
    Off,
    /// Corresponds to the `Error` security level.
    Error,
    /// Corresponds to the `Warn` security level.
    Warn,
    /// Corresponds to the `Info` security level.
    Info,
    /// Corresponds to the `Debug` security level.
    Debug,
    /// Corresponds to the `Trace` security level.
    Trace,
}

/// How each tracing event is written.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// One line per event, with its span context.
    Full,
    /// Multi-line, with the source file of the event.
    Pretty,
    /// One short line per event.
    Compact,
    /// One JSON object per line.
    Json,
}
