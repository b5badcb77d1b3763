//! Structured logging seam for the realizer.
//!
//! The realizer's log messages are part of its observable contract, so
//! logging goes through an injected handle rather than ambient macros:
//! callers decide where entries land and tests can capture exactly what was
//! emitted. [`TracingLogger`] is the production implementation.

use std::fmt::Display;

/// Structured key-value logger consumed by the realizer.
///
/// Message strings passed to these methods are stable and scraped
/// downstream; implementations must forward them unmodified.
pub trait Logger: Send + Sync {
    /// Log an informational message.
    fn info(&self, msg: &str);

    /// Log an error-level message with its underlying cause.
    fn error(&self, error: &dyn Display, msg: &str);
}

/// `Logger` backed by the `tracing` ecosystem.
///
/// Error entries carry the underlying cause in a distinct `error` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn error(&self, error: &dyn Display, msg: &str) {
        tracing::error!(error = %error, "{msg}");
    }
}
