//! Explicit per-run session state.
//!
//! A session is created when a run starts and dropped when it ends. It owns
//! the audit sink and the few facts a run needs to remember between
//! documents; nothing lives in process-wide or filesystem marker state.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use veritas_core::models::VerificationReport;
use veritas_core::traits::IAuditSink;
use veritas_observability::tracing_setup::events;

pub struct VerificationSession {
    id: String,
    started_at: DateTime<Utc>,
    audit_sink: Option<Box<dyn IAuditSink>>,
    instruction_check_done: bool,
    documents_verified: usize,
    documents_passed: usize,
}

/// What a finished session did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub documents_verified: usize,
    pub documents_passed: usize,
}

impl VerificationSession {
    /// Start a session that audits every report through `sink`.
    pub fn new(sink: Box<dyn IAuditSink>) -> Self {
        Self::build(Some(sink))
    }

    /// Start a session that keeps no audit trail.
    pub fn without_audit() -> Self {
        Self::build(None)
    }

    fn build(audit_sink: Option<Box<dyn IAuditSink>>) -> Self {
        let session = Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            audit_sink,
            instruction_check_done: false,
            documents_verified: 0,
            documents_passed: 0,
        };
        events::session_started(&session.id);
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn documents_verified(&self) -> usize {
        self.documents_verified
    }

    /// True until [`mark_instruction_check`](Self::mark_instruction_check)
    /// is called once in this session.
    pub fn instruction_check_pending(&self) -> bool {
        !self.instruction_check_done
    }

    /// Record that the instruction check ran. Returns true the first time.
    pub fn mark_instruction_check(&mut self) -> bool {
        !std::mem::replace(&mut self.instruction_check_done, true)
    }

    /// Count the report and write it to the audit sink.
    ///
    /// Audit failures are logged, not propagated: losing an audit record
    /// never fails a verification run.
    pub fn record(&mut self, report: &VerificationReport) -> Option<PathBuf> {
        self.documents_verified += 1;
        if report.passed() {
            self.documents_passed += 1;
        }

        let sink = self.audit_sink.as_ref()?;
        match sink.record_report(report) {
            Ok(path) => path,
            Err(e) => {
                events::audit_write_failed(&self.id, &e.to_string());
                None
            }
        }
    }

    /// End the session.
    pub fn finish(self) -> SessionSummary {
        let summary = SessionSummary {
            id: self.id,
            started_at: self.started_at,
            ended_at: Utc::now(),
            documents_verified: self.documents_verified,
            documents_passed: self.documents_passed,
        };
        events::session_finished(
            &summary.id,
            summary.documents_verified,
            summary.documents_passed,
        );
        summary
    }
}
