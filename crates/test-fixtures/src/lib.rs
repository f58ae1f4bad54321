//! Shared fixtures for Veritas tests: sample documents, recorded registry
//! responses, and in-memory fakes for the registry and audit seams.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use veritas_core::errors::{AuditError, RegistryError};
use veritas_core::models::{CitationVerificationReport, RegistryRecord, VerificationReport};
use veritas_core::traits::{IAuditSink, IBibliographicRegistry};

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as a string.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = load_text(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Sample documents under `data/documents/`.
pub mod documents {
    pub fn clean_note() -> String {
        super::load_text("documents/clean_note.md")
    }

    pub fn uncited_claims() -> String {
        super::load_text("documents/uncited_claims.md")
    }

    pub fn messy_formatting() -> String {
        super::load_text("documents/messy_formatting.md")
    }

    pub fn cited_review() -> String {
        super::load_text("documents/cited_review.md")
    }
}

/// One citation-free, claim-free markdown note.
pub const CLEAN_MARKDOWN: &str = "# Reading list\n\nNotes from the journal club.\n";

/// Build a registry record.
pub fn record(identifier: &str, authors: &[&str], pubdate: &str, title: &str) -> RegistryRecord {
    RegistryRecord {
        identifier: identifier.to_string(),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        pubdate: pubdate.to_string(),
        title: title.to_string(),
    }
}

/// Registry fake answering from a fixed table.
///
/// Identifiers not in the table answer `Ok(None)`; identifiers registered
/// with [`StaticRegistry::failing`] answer a network error.
#[derive(Default)]
pub struct StaticRegistry {
    records: HashMap<String, RegistryRecord>,
    failing: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: RegistryRecord) -> Self {
        self.records.insert(record.identifier.clone(), record);
        self
    }

    pub fn failing(mut self, identifier: &str) -> Self {
        self.failing.push(identifier.to_string());
        self
    }

    /// Identifiers fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl IBibliographicRegistry for StaticRegistry {
    fn fetch(&self, identifier: &str) -> Result<Option<RegistryRecord>, RegistryError> {
        self.calls.lock().unwrap().push(identifier.to_string());
        if self.failing.iter().any(|id| id == identifier) {
            return Err(RegistryError::Network {
                identifier: identifier.to_string(),
                reason: "connection refused".to_string(),
            });
        }
        Ok(self.records.get(identifier).cloned())
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Audit sink that keeps everything in memory.
///
/// Clones share state, so a test can hand one clone to a session and keep
/// inspecting the other.
#[derive(Clone, Default)]
pub struct MemoryAuditSink {
    reports: Arc<Mutex<Vec<serde_json::Value>>>,
    citation_runs: Arc<Mutex<usize>>,
    fail_writes: bool,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every write fails.
    pub fn broken() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Serialized reports recorded so far.
    pub fn reports(&self) -> Vec<serde_json::Value> {
        self.reports.lock().unwrap().clone()
    }

    pub fn citation_runs(&self) -> usize {
        *self.citation_runs.lock().unwrap()
    }

    fn check_writable(&self) -> Result<(), AuditError> {
        if self.fail_writes {
            return Err(AuditError::WriteFailed {
                path: "<memory>".to_string(),
                reason: "sink is broken".to_string(),
            });
        }
        Ok(())
    }
}

impl IAuditSink for MemoryAuditSink {
    fn record_report(&self, report: &VerificationReport) -> Result<Option<PathBuf>, AuditError> {
        self.check_writable()?;
        let value = serde_json::to_value(report).map_err(|e| AuditError::Serialization {
            reason: e.to_string(),
        })?;
        self.reports.lock().unwrap().push(value);
        Ok(None)
    }

    fn record_citation_run(&self, _report: &CitationVerificationReport) -> Result<(), AuditError> {
        self.check_writable()?;
        *self.citation_runs.lock().unwrap() += 1;
        Ok(())
    }
}
