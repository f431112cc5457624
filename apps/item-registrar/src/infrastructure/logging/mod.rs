//! Logging Adapters

use crate::application::ports::LoggerPort;

/// Logger that forwards to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl LoggerPort for TracingLogger {
    fn log_info(&self, message: &str) {
        tracing::info!(target: "item_registrar::use_case", "{message}");
    }
}
