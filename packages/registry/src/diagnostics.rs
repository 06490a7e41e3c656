//! Diagnostic sink injected into the registry loader.
//!
//! Messages are purely observational: a sink never influences what gets
//! loaded. [`NoopSink`] drops everything, [`TracingSink`] forwards to
//! `tracing`.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
}

/// Receiver for leveled, formatted diagnostic messages.
pub trait DiagnosticSink: Send + Sync {
    /// Record a single message.
    fn emit(&self, level: Level, message: fmt::Arguments<'_>);
}

/// Sink that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&self, _level: Level, _message: fmt::Arguments<'_>) {}
}

/// Sink that forwards messages to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, level: Level, message: fmt::Arguments<'_>) {
        match level {
            Level::Trace => tracing::trace!("{message}"),
            Level::Debug => tracing::debug!("{message}"),
            Level::Info => tracing::info!("{message}"),
            Level::Warn => tracing::warn!("{message}"),
        }
    }
}
