//! Logging for the service.
//!
//! [`get_subscriber`] builds a `tracing` subscriber from the configured
//! [`LoggerFormat`] and level, [`init_subscriber`] installs it globally and
//! routes `log` records from dependencies into it. Request spans come from
//! `tracing-actix-web`, see `startup::engine`.

use is_terminal::IsTerminal;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{
    layer::{Layer, SubscriberExt},
    registry::LookupSpan,
    EnvFilter, Registry,
};

/// Output layout of log lines, picked in `application.logger_format`.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoggerFormat {
    /// One line per event, no timestamps or targets.
    #[default]
    Compact,
    Full,
    /// Multi-line, for local development.
    Pretty,
    Json,
    /// Bunyan-compatible JSON with span fields attached, for log shippers.
    Bunyan,
}

/// Where log lines go: `std::io::stderr` in the binary, `std::io::sink` in quiet tests.
pub struct LoggerOutbound<W> {
    make_writer: W,
}

impl<W> LoggerOutbound<W>
where
    W: for<'a> MakeWriter<'a> + 'static,
{
    pub fn new(make_writer: W) -> Self {
        Self { make_writer }
    }

    fn fmt_layer_full<S>(self) -> impl Layer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        tracing_subscriber::fmt::Layer::new()
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(self.make_writer)
    }

    fn fmt_layer_pretty<S>(self) -> impl Layer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        tracing_subscriber::fmt::Layer::new()
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(self.make_writer)
            .pretty()
    }

    fn fmt_layer_json<S>(self) -> impl Layer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        tracing_subscriber::fmt::Layer::new()
            .with_writer(self.make_writer)
            .json()
            .with_current_span(true)
    }

    fn fmt_layer_compact<S>(self) -> impl Layer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        tracing_subscriber::fmt::Layer::new()
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(self.make_writer)
            .compact()
            .without_time()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
    }

    fn fmt_layer_bunyan<S>(self, name: String) -> impl Layer<S>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        BunyanFormattingLayer::new(name, self.make_writer)
    }
}

/// Get the subscriber for the logger.
/// - `name` is the service name stamped on bunyan records.
/// - `env_filter` is the fallback level ("info", "debug", ...) when `RUST_LOG` is unset.
/// - `format` picks the line layout.
/// - `output` is where the log will be written to.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    format: LoggerFormat,
    output: LoggerOutbound<Sink>,
) -> Box<dyn Subscriber + Send + Sync>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));

    let filter_layer = Registry::default().with(env_filter);

    match format {
        LoggerFormat::Compact => Box::new(filter_layer.with(output.fmt_layer_compact())),
        LoggerFormat::Full => Box::new(filter_layer.with(output.fmt_layer_full())),
        LoggerFormat::Pretty => Box::new(filter_layer.with(output.fmt_layer_pretty())),
        LoggerFormat::Json => Box::new(filter_layer.with(output.fmt_layer_json())),
        LoggerFormat::Bunyan => Box::new(
            filter_layer
                .with(JsonStorageLayer)
                .with(output.fmt_layer_bunyan(name)),
        ),
    }
}

/// Init the subscriber for the logger.
/// Be sure to setup this to collect logs. Fails if a global subscriber is already installed.
pub fn init_subscriber<S>(subscriber: S) -> anyhow::Result<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
