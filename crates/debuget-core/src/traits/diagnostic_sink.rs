use serde::{Deserialize, Serialize};

/// Severity attached to text written to a diagnostic sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Destination of rendered reports, e.g. the standard error stream.
pub trait IDiagnosticSink: Send + Sync {
    fn emit(&self, severity: Severity, text: &str);
}
