//! On-disk audit log.
//!
//! One pretty-printed JSON file per verified document,
//! `verification_<YYYYmmdd_HHMMSS>.json`, plus an append-only text log of
//! registry verification runs. Every write opens, writes and closes; no
//! handle outlives a call.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use veritas_core::constants::{AUDIT_FILE_PREFIX, AUDIT_TIMESTAMP_FORMAT, CITATION_LOG_FILENAME};
use veritas_core::errors::AuditError;
use veritas_core::models::{CitationVerificationReport, VerificationReport};
use veritas_core::traits::IAuditSink;

use crate::tracing_setup::events;

const AUDIT_FILE_EXTENSION: &str = "json";
const CITATION_LOG_RULE_WIDTH: usize = 60;
const MAX_COLLISION_SUFFIX: u32 = 9999;

/// Audit sink backed by a directory.
#[derive(Debug, Clone)]
pub struct AuditLog {
    dir: PathBuf,
}

/// Result of a retention sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneSummary {
    pub removed: Vec<PathBuf>,
    pub kept: usize,
}

impl AuditLog {
    /// Audit log rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn citation_log_path(&self) -> PathBuf {
        self.dir.join(CITATION_LOG_FILENAME)
    }

    fn ensure_dir(&self) -> Result<(), AuditError> {
        fs::create_dir_all(&self.dir).map_err(|e| AuditError::DirectoryUnavailable {
            path: self.dir.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Write `bytes` to a fresh file named after `key`. A second record in
    /// the same second gets `_1`, `_2`, ... appended.
    fn create_unique(&self, key: &str, bytes: &[u8]) -> Result<PathBuf, AuditError> {
        for attempt in 0..=MAX_COLLISION_SUFFIX {
            let name = match attempt {
                0 => format!("{AUDIT_FILE_PREFIX}{key}.{AUDIT_FILE_EXTENSION}"),
                n => format!("{AUDIT_FILE_PREFIX}{key}_{n}.{AUDIT_FILE_EXTENSION}"),
            };
            let path = self.dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(bytes).map_err(|e| AuditError::WriteFailed {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(AuditError::WriteFailed {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })
                }
            }
        }
        Err(AuditError::WriteFailed {
            path: self.dir.display().to_string(),
            reason: "no free audit file name".to_string(),
        })
    }

    /// Delete audit files older than `retention_days` relative to `now`.
    ///
    /// Age comes from the timestamp in the file name. Files that do not
    /// follow the audit naming scheme, including the citation log, are left
    /// alone. A missing directory is an empty sweep. A retention period
    /// reaching past the earliest representable date keeps everything.
    pub fn prune(&self, retention_days: u32, now: DateTime<Utc>) -> Result<PruneSummary, AuditError> {
        let mut summary = PruneSummary::default();
        if !self.dir.exists() {
            return Ok(summary);
        }

        let cutoff = now.checked_sub_signed(Duration::days(i64::from(retention_days)));
        let entries = fs::read_dir(&self.dir).map_err(|e| AuditError::DirectoryUnavailable {
            path: self.dir.display().to_string(),
            reason: e.to_string(),
        })?;

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(written) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(audit_file_timestamp)
            else {
                continue;
            };

            if cutoff.is_some_and(|cutoff| written < cutoff) {
                fs::remove_file(&path).map_err(|e| AuditError::WriteFailed {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                summary.removed.push(path);
            } else {
                summary.kept += 1;
            }
        }

        summary.removed.sort();
        events::logs_pruned(&self.dir, summary.removed.len(), summary.kept);
        Ok(summary)
    }
}

/// Timestamp encoded in an audit file name, if it is one.
pub fn audit_file_timestamp(file_name: &str) -> Option<DateTime<Utc>> {
    let stem = file_name
        .strip_prefix(AUDIT_FILE_PREFIX)?
        .strip_suffix(AUDIT_FILE_EXTENSION)?
        .strip_suffix('.')?;
    // `YYYYmmdd_HHMMSS` is 15 ASCII characters; a collision suffix may follow.
    let key = stem.get(..15)?;
    NaiveDateTime::parse_from_str(key, AUDIT_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Text block appended to the citation log for one run.
pub fn format_citation_run(report: &CitationVerificationReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"=".repeat(CITATION_LOG_RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!("Verification at {}\n", report.timestamp.to_rfc3339()));
    out.push_str(&format!(
        "File: {}\n",
        report.source.as_deref().unwrap_or("<stdin>")
    ));
    out.push_str(&format!("Citations verified: {}\n", report.checks.len()));
    out.push_str(&format!(
        "Status: {}\n",
        if report.passed() { "SUCCESS" } else { "FAILED" }
    ));
    let errors = report.errors();
    if !errors.is_empty() {
        out.push_str("Errors:\n");
        for error in errors {
            out.push_str(&format!("  - {}\n", error.message));
        }
    }
    out
}

impl IAuditSink for AuditLog {
    fn record_report(&self, report: &VerificationReport) -> Result<Option<PathBuf>, AuditError> {
        self.ensure_dir()?;
        let bytes = serde_json::to_vec_pretty(report).map_err(|e| AuditError::Serialization {
            reason: e.to_string(),
        })?;
        let path = self.create_unique(&report.timestamp_key(), &bytes)?;
        events::audit_written(&path);
        Ok(Some(path))
    }

    fn record_citation_run(&self, report: &CitationVerificationReport) -> Result<(), AuditError> {
        self.ensure_dir()?;
        let path = self.citation_log_path();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| AuditError::WriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        file.write_all(format_citation_run(report).as_bytes())
            .map_err(|e| AuditError::WriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        events::audit_written(&path);
        Ok(())
    }
}
