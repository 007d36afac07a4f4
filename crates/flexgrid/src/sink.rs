//! Where diagnostics go.
//!
//! The validator only returns records; a [`DiagnosticSink`] decides what to
//! do with them. [`LogSink`] writes them to the `log` facade, a
//! `Vec<Diagnostic>` collects them, and `()` drops them.

use crate::config::GridConfig;
use crate::validator::{Diagnostic, Severity};

/// Log target used by [`LogSink`].
pub const DIAGNOSTIC_TARGET: &str = "flexgrid::validator";

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl DiagnosticSink for () {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Writes each diagnostic as `[name] message` at warn level.
#[derive(Debug, Clone)]
pub struct LogSink {
    name: String,
}

impl LogSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.name.clone())
    }
}

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => {
                log::warn!(target: DIAGNOSTIC_TARGET, "[{}] {}", self.name, diagnostic)
            }
        }
    }
}
