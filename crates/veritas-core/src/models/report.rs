use chrono::{DateTime, Utc};
use serde::Serialize;

use super::violation::Violation;
use crate::constants::AUDIT_TIMESTAMP_FORMAT;

/// Outcome of one verification run over one document.
///
/// Built once and never mutated. `passed` is derived from the violation list
/// at construction: true iff there are no violations, whatever the warnings.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    timestamp: DateTime<Utc>,
    session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<String>,
    violations: Vec<Violation>,
    warnings: Vec<Violation>,
    content_length: usize,
    passed: bool,
}

impl VerificationReport {
    pub fn new(
        session_id: impl Into<String>,
        filename: Option<String>,
        violations: Vec<Violation>,
        warnings: Vec<Violation>,
        content_length: usize,
    ) -> Self {
        Self::at(Utc::now(), session_id, filename, violations, warnings, content_length)
    }

    /// Same as [`new`](Self::new) with an explicit timestamp.
    pub fn at(
        timestamp: DateTime<Utc>,
        session_id: impl Into<String>,
        filename: Option<String>,
        violations: Vec<Violation>,
        warnings: Vec<Violation>,
        content_length: usize,
    ) -> Self {
        let passed = violations.is_empty();
        Self {
            timestamp,
            session_id: session_id.into(),
            filename,
            violations,
            warnings,
            content_length,
            passed,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Timestamp in the `YYYYmmdd_HHMMSS` form used to key audit files.
    pub fn timestamp_key(&self) -> String {
        self.timestamp.format(AUDIT_TIMESTAMP_FORMAT).to_string()
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn warnings(&self) -> &[Violation] {
        &self.warnings
    }

    pub fn content_length(&self) -> usize {
        self.content_length
    }

    pub fn passed(&self) -> bool {
        self.passed
    }
}

/// Caller-facing decision derived from a report and the enforcement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No violations.
    Pass,
    /// Violations exist but every violated rule is configured to warn.
    Warn,
    /// At least one violated rule is configured to block.
    Block,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Warn => "warn",
            Verdict::Block => "block",
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Verdict::Block)
    }

    /// Process exit code for the verdict: only `Block` fails.
    pub fn exit_code(&self) -> i32 {
        if self.is_blocking() {
            1
        } else {
            0
        }
    }
}
