//! Audit orchestration: discovery, parsing, checking and reporting for one project.

mod reader;
mod runner;

pub use reader::{FileReader, RealFileReader};
pub use runner::Auditor;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::error::StyleAuditError;
use crate::report::{AuditReport, FixPlan};

/// Stage of an audit run reported through the progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressPhase {
    Discovery,
    Parsing,
    Checking,
    Reporting,
}

impl ProgressPhase {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Parsing => "parsing",
            Self::Checking => "checking",
            Self::Reporting => "reporting",
        }
    }
}

impl fmt::Display for ProgressPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress callback: `(phase, processed_files, total_files, message)`.
pub type ProgressCallback<'a> = &'a (dyn Fn(ProgressPhase, usize, usize, &str) + Sync);

/// Cooperative cancellation flag, checked between files.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    Read,
    Parse,
    Checker,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Parse => "parse",
            Self::Checker => "checker",
        }
    }
}

/// A per-file problem that did not stop the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiagnostic {
    pub path: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for FileDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} error: {}", self.path, self.kind.label(), self.message)
    }
}

/// Result of [`Auditor::run`].
#[derive(Debug)]
pub enum AuditOutcome {
    Success {
        report: AuditReport,
        plan: FixPlan,
        diagnostics: Vec<FileDiagnostic>,
    },
    Failure {
        error: StyleAuditError,
    },
}

impl AuditOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
