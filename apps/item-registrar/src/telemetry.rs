//! Tracing Setup
//!
//! Console logging through `tracing-subscriber`. `RUST_LOG` takes
//! precedence over the configured level.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Build the filter used when `RUST_LOG` is unset or invalid.
#[must_use]
pub fn default_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(format!("item_registrar={}", config.level))
        .unwrap_or_else(|_| EnvFilter::new("item_registrar=info"))
}

/// Initialize the global tracing subscriber.
///
/// Calling this more than once leaves the first subscriber installed.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config));

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
    let result = match config.format {
        LogFormat::Full => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}
