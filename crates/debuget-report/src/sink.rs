//! Destinations for rendered reports.

use std::io::Write;
use std::sync::Mutex;

use debuget_core::traits::{IDiagnosticSink, Severity};

/// Writes each report to standard error, surrounded by blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl IDiagnosticSink for StderrSink {
    fn emit(&self, _severity: Severity, text: &str) {
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = writeln!(stderr, "\n{text}") {
            tracing::warn!(error = %e, "failed to write report to stderr");
        }
    }
}

/// Captures emitted text in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything emitted so far, in emission order.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Emitted texts only.
    pub fn texts(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, text)| text).collect()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IDiagnosticSink for MemorySink {
    fn emit(&self, severity: Severity, text: &str) {
        let mut guard = match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push((severity, text.to_string()));
    }
}
