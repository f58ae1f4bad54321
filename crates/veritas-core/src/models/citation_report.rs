use chrono::{DateTime, Utc};
use serde::Serialize;

use super::citation::Citation;
use super::violation::Violation;

/// Cited vs. registry values for a citation that failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryMismatch {
    pub cited_author: String,
    pub cited_year: String,
    pub actual_author: String,
    pub actual_year: String,
    pub title: String,
}

/// Outcome of verifying one citation against the registry.
#[derive(Debug, Clone, Serialize)]
pub struct CitationCheck {
    pub citation: Citation,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<RegistryMismatch>,
}

/// Outcome of verifying every citation extracted from one text.
#[derive(Debug, Clone, Serialize)]
pub struct CitationVerificationReport {
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub checks: Vec<CitationCheck>,
}

impl CitationVerificationReport {
    pub fn new(source: Option<String>, checks: Vec<CitationCheck>) -> Self {
        Self {
            timestamp: Utc::now(),
            source,
            checks,
        }
    }

    /// True when every extracted citation verified. Vacuously true when the
    /// text carried no citations.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.verified)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CitationCheck> {
        self.checks.iter().filter(|c| !c.verified)
    }

    pub fn errors(&self) -> Vec<&Violation> {
        self.checks.iter().filter_map(|c| c.violation.as_ref()).collect()
    }
}
