//! Logger Port (Driven Port)

/// Port for business-level log messages emitted by use cases.
pub trait LoggerPort: Send + Sync {
    /// Log an informational message.
    fn log_info(&self, message: &str);
}

/// Logger that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl LoggerPort for NoOpLogger {
    fn log_info(&self, _message: &str) {}
}
