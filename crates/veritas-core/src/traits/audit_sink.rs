use std::path::PathBuf;

use crate::errors::AuditError;
use crate::models::{CitationVerificationReport, VerificationReport};

/// Append-only destination for verification records.
///
/// Each call is one scoped write; implementations must not hold resources
/// open between calls.
pub trait IAuditSink: Send + Sync {
    /// Persist one document report. Returns where it was written, if anywhere.
    fn record_report(&self, report: &VerificationReport) -> Result<Option<PathBuf>, AuditError>;

    /// Append one registry verification run.
    fn record_citation_run(&self, report: &CitationVerificationReport) -> Result<(), AuditError>;
}
