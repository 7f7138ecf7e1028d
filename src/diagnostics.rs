//! Diagnostic sink
//!
//! An optional collaborator that receives every raw response (at
//! [`DiagnosticLevel::Trace`]) and any server-reported warnings (at
//! [`DiagnosticLevel::Warning`]). It is attached when the client is built;
//! a client without one simply skips these calls.

use crate::types::JsonValue;
use tracing::{trace, warn};

/// Level tag for a diagnostic record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticLevel {
    /// Raw transport response
    Trace,
    /// Non-fatal `warnings` reported by the server
    Warning,
}

impl DiagnosticLevel {
    /// Tag string for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticLevel::Trace => "trace",
            DiagnosticLevel::Warning => "warning",
        }
    }
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives diagnostic records from an [`ApiClient`](crate::ApiClient)
pub trait DiagnosticSink: Send + Sync {
    /// Record one payload at the given level
    fn log(&self, level: DiagnosticLevel, payload: &JsonValue);
}

impl<F> DiagnosticSink for F
where
    F: Fn(DiagnosticLevel, &JsonValue) + Send + Sync,
{
    fn log(&self, level: DiagnosticLevel, payload: &JsonValue) {
        self(level, payload);
    }
}

/// Sink that forwards records to `tracing` under the `mwapi` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, level: DiagnosticLevel, payload: &JsonValue) {
        match level {
            DiagnosticLevel::Trace => trace!(target: "mwapi", %payload, "api response"),
            DiagnosticLevel::Warning => warn!(target: "mwapi", %payload, "api warnings"),
        }
    }
}
