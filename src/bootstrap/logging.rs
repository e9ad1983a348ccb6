//! Tracing subscriber for applications embedding the tracker list.
//!
//! [`setup`] writes the events to the standard output, filtered by the
//! configured [`Threshold`] and formatted in the configured [`Style`]. A
//! threshold of `off` installs nothing. Applications that already have a
//! global subscriber don't need it.
//!
//! Refer to the [configuration crate documentation](https://docs.rs/torrust-tracker-list-configuration) to know how to change log settings.
use std::sync::Once;

use torrust_tracker_list_configuration::{Logging, Style, Threshold};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

static INIT: Once = Once::new();

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync>;

/// Installs the global subscriber. Only the first call has an effect.
pub fn setup(cfg: &Logging) {
    let filter = map_to_tracing_level_filter(cfg.threshold);

    if filter == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| match tracing::subscriber::set_global_default(subscriber(filter, cfg.style, std::io::stdout)) {
        Ok(()) => info!(threshold = ?cfg.threshold, style = ?cfg.style, "logging initialized"),
        Err(err) => warn!(%err, "another global subscriber is already installed"),
    });
}

fn map_to_tracing_level_filter(threshold: Threshold) -> LevelFilter {
    match threshold {
        Threshold::Off => LevelFilter::OFF,
        Threshold::Error => LevelFilter::ERROR,
        Threshold::Warn => LevelFilter::WARN,
        Threshold::Info => LevelFilter::INFO,
        Threshold::Debug => LevelFilter::DEBUG,
        Threshold::Trace => LevelFilter::TRACE,
    }
}

fn subscriber<W>(filter: LevelFilter, style: Style, writer: W) -> BoxedSubscriber
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_ansi(style != Style::Json)
        .with_writer(writer);

    match style {
        Style::Full => Box::new(builder.finish()),
        Style::Pretty => Box::new(builder.pretty().with_file(true).finish()),
        Style::Compact => Box::new(builder.compact().finish()),
        Style::Json => Box::new(builder.json().finish()),
    }
}
