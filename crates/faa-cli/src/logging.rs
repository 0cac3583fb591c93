//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! All diagnostics go to stderr so that stdout only carries the one-line
//! run result.
//!
//! # Log Levels
//!
//! - `error`: Feed retrieval or parse failures
//! - `warn`: Suspicious responses (e.g. non-XML content type)
//! - `info`: Pipeline stage progress, event counts
//! - `debug`: Per-event extraction and de-duplication details
//! - `trace`: Skipped feed nodes
//!
//! `RUST_LOG` overrides the configured level.

use std::io;

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Subscriber settings for one run.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level for the bulletin crates when `RUST_LOG` is unset.
    pub level: Level,
    pub with_timestamps: bool,
    /// Include the emitting module path.
    pub with_target: bool,
    pub with_ansi: bool,
    /// Output format. JSON output never uses ANSI colors.
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Full format: level, message, fields and span context.
    Pretty,
    /// One line per event.
    #[default]
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_timestamps: true,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    /// Enable or disable ANSI colors.
    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Initialize the global tracing subscriber, writing to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    init_logging_with_writer(config, io::stderr)
}

/// Initialize logging with a custom writer (useful for testing).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<(), TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(output_layer(config, writer))
        .with(build_env_filter(config.level))
        .try_init()
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn output_layer<W>(config: &LogConfig, writer: W) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);

    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => base.json().with_ansi(false).boxed(),
        (LogFormat::Compact, true) => base.compact().with_ansi(config.with_ansi).boxed(),
        (LogFormat::Compact, false) => base
            .compact()
            .with_ansi(config.with_ansi)
            .without_time()
            .boxed(),
        (LogFormat::Pretty, true) => base.with_ansi(config.with_ansi).boxed(),
        (LogFormat::Pretty, false) => base.with_ansi(config.with_ansi).without_time().boxed(),
    }
}

/// `RUST_LOG` when set, otherwise `level` for the bulletin crates and
/// `warn` for dependencies such as reqwest and rustls.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    ["faa_cli", "faa_feed", "faa_model", "faa_report"]
        .iter()
        .fold(String::from("warn"), |directives, target| {
            format!("{directives},{target}={level}")
        })
}
