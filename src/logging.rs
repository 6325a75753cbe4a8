//! Diagnostic logging to stderr through `tracing`.
//!
//! Standard output is reserved for command results, so every layer writes to
//! stderr. `RUST_LOG` takes precedence over the configured level; `-v` forces
//! `debug` for this crate.

use crate::config::{Config, LogFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub ansi: bool,
}

impl LoggingConfig {
    pub fn from_config(cfg: &Config, verbose: bool) -> Self {
        let level = if verbose {
            "debug".to_string()
        } else {
            cfg.log_level.clone()
        };
        Self {
            level,
            format: cfg.log_format,
            ansi: cfg.use_colors(),
        }
    }

    fn filter(&self) -> EnvFilter {
        let base = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("fitlog={}", self.level)));
        base.add_directive(quiet("hyper"))
            .add_directive(quiet("reqwest"))
            .add_directive(quiet("rustls"))
    }
}

fn quiet(target: &str) -> tracing_subscriber::filter::Directive {
    // A constant directive; parsing cannot fail for these targets.
    format!("{target}=warn")
        .parse()
        .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::WARN.into())
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(config: &LoggingConfig) {
    let filter = config.filter();
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_ansi(config.ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(config.ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
