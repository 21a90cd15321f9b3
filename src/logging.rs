//! Logging side channel and subscriber setup.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Write-only sink for the resolver's informational messages.
///
/// Implementations must tolerate calls from concurrent resolutions.
pub trait LogSink: Send + Sync {
    fn log_info(&self, message: &str);
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn log_info(&self, message: &str) {
        (**self).log_info(message)
    }
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn log_info(&self, message: &str) {
        (**self).log_info(message)
    }
}

/// Forwards every message to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log_info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Initialize a tracing subscriber writing to stderr.
///
/// Uses the `RUST_LOG` environment variable to determine the log level,
/// defaulting to "info" if not set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
