//! # Machine Logger
//!
//! This crate implements structured logging for the machine.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured, not text-based or printf-style.
//! Producers build [`LogEntry`] values and hand them to an injected
//! [`Logger`] sink; the host decides whether entries reach a console, a
//! UI panel, or nowhere at all.

use std::fmt;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// A structured log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Creates a new log entry
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the log entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

/// Sink for structured log entries
pub trait Logger {
    /// Records one entry
    fn log(&mut self, entry: LogEntry);
}

/// Logger that retains entries in memory
///
/// Used in tests to assert on diagnostics, and by hosts that render a
/// log panel.
#[derive(Debug, Default)]
pub struct BufferLogger {
    entries: Vec<LogEntry>,
}

impl BufferLogger {
    /// Creates an empty buffer logger
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded entries
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Clears the recorded entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Logger for BufferLogger {
    fn log(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }
}

/// Logger that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&mut self, _entry: LogEntry) {}
}
