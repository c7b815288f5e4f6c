//! Log subscriber setup for yomtov binaries.
//!
//! Library code only emits events through `tracing` macros. A binary calls
//! [`init_tracing`] once with a [`TracingConfig`]:
//!
//! ```ignore
//! use yomtov_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::for_cli(verbose)).expect("failed to initialize tracing");
//! ```
//!
//! Events are written to stderr so stdout stays clean for cards and JSON.

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum TracingError {
    /// A global subscriber is already installed
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// The filter directives do not parse
    #[error("invalid log filter: {0}")]
    EnvFilter(#[from] tracing_subscriber::filter::ParseError),
}

/// How log lines are laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingOutputFormat {
    /// One line per event
    #[default]
    Compact,
    /// Multi-line, fields on their own lines
    Pretty,
    /// JSON lines
    Json,
}

/// Subscriber settings
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Level applied to the yomtov crates when `RUST_LOG` is unset
    pub level: Level,
    /// Line layout
    pub format: TracingOutputFormat,
    /// Print the source file and line of each event
    pub show_source: bool,
    /// Prefix events with a timestamp (JSON always has one)
    pub timestamps: bool,
    /// Explicit filter directives; wins over `level` and `RUST_LOG`
    pub directives: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::for_cli(false)
    }
}

impl TracingConfig {
    /// Settings for the `yomtov` command.
    ///
    /// Quiet unless something goes wrong; `verbose` (the `-v` flag) turns on
    /// debug events with their source location.
    #[must_use]
    pub fn for_cli(verbose: bool) -> Self {
        Self {
            level: if verbose { Level::DEBUG } else { Level::WARN },
            format: TracingOutputFormat::Compact,
            show_source: verbose,
            timestamps: false,
            directives: None,
        }
    }

    /// Set the level for the yomtov crates
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the line layout
    #[must_use]
    pub fn with_format(mut self, format: TracingOutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Use explicit filter directives (e.g. `yomtov_feed=trace`)
    #[must_use]
    pub fn with_directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    fn filter(&self) -> Result<EnvFilter, TracingError> {
        if let Some(ref directives) = self.directives {
            return Ok(EnvFilter::try_new(directives)?);
        }
        Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("yomtov={}", self.level))))
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if a subscriber is already installed or the directives are invalid.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let subscriber = tracing_subscriber::registry()
        .with(config.filter()?)
        .with(stderr_layer(&config));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn stderr_layer<S>(config: &TracingConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(config.show_source)
        .with_line_number(config.show_source);

    match (config.format, config.timestamps) {
        (TracingOutputFormat::Json, _) => base.json().boxed(),
        (TracingOutputFormat::Pretty, true) => base.pretty().boxed(),
        (TracingOutputFormat::Pretty, false) => base.pretty().without_time().boxed(),
        (TracingOutputFormat::Compact, true) => base.compact().boxed(),
        (TracingOutputFormat::Compact, false) => base.compact().without_time().boxed(),
    }
}
