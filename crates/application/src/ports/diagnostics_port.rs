//! Diagnostics port
//!
//! The sink the directory client reports failures to. Injected at
//! construction so each client (and each test) owns its own sink.

use std::fmt;

#[cfg(test)]
use mockall::automock;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}

/// Port for emitting diagnostics
#[cfg_attr(test, automock)]
pub trait DiagnosticsPort: Send + Sync {
    /// Record a message at the given severity
    fn log(&self, severity: Severity, message: &str);
}

/// Forwards diagnostics to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticsPort for TracingDiagnostics {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(target: "vehicle_directory", "{message}"),
            Severity::Info => tracing::info!(target: "vehicle_directory", "{message}"),
            Severity::Warn => tracing::warn!(target: "vehicle_directory", "{message}"),
            Severity::Error => tracing::error!(target: "vehicle_directory", "{message}"),
        }
    }
}

/// A recorded diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEntry {
    pub severity: Severity,
    pub message: String,
}

/// Keeps diagnostics in memory, e.g. to surface them to an embedding application
#[derive(Debug, Default)]
pub struct BufferedDiagnostics {
    entries: Mutex<Vec<DiagnosticEntry>>,
}

impl BufferedDiagnostics {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    #[must_use]
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries.lock().clone()
    }

    /// Number of entries recorded at `severity`
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|entry| entry.severity == severity)
            .count()
    }

    /// Drop all recorded entries
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl DiagnosticsPort for BufferedDiagnostics {
    fn log(&self, severity: Severity, message: &str) {
        self.entries.lock().push(DiagnosticEntry {
            severity,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_diagnostics_records_in_order() {
        let sink = BufferedDiagnostics::new();
        sink.log(Severity::Info, "first");
        sink.log(Severity::Error, "second");

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].severity, Severity::Error);
        assert_eq!(sink.count(Severity::Error), 1);
    }

    #[test]
    fn buffered_diagnostics_clear() {
        let sink = BufferedDiagnostics::new();
        sink.log(Severity::Warn, "gone");
        sink.clear();
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn tracing_diagnostics_accepts_every_severity() {
        let sink = TracingDiagnostics;
        for severity in [Severity::Debug, Severity::Info, Severity::Warn, Severity::Error] {
            sink.log(severity, "no subscriber installed");
        }
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Error > Severity::Warn);
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
