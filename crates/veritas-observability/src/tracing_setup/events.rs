//! Structured log events for key verification operations.
//!
//! Each function emits a `tracing` event with structured fields.

use std::path::Path;

/// Log the start of a verification session.
pub fn session_started(session_id: &str) {
    tracing::debug!(event = "session_started", session_id = %session_id, "session started");
}

/// Log the end of a verification session.
pub fn session_finished(session_id: &str, documents_verified: usize, documents_passed: usize) {
    tracing::debug!(
        event = "session_finished",
        session_id = %session_id,
        documents_verified = documents_verified,
        documents_passed = documents_passed,
        "session finished"
    );
}

/// Log one verified document.
pub fn document_verified(
    session_id: &str,
    filename: Option<&str>,
    violations: usize,
    warnings: usize,
    verdict: &str,
) {
    tracing::info!(
        event = "document_verified",
        session_id = %session_id,
        filename = filename.unwrap_or("<stdin>"),
        violations = violations,
        warnings = warnings,
        verdict = %verdict,
        "document verified"
    );
}

/// Log a citation that disagrees with its registry record.
pub fn citation_mismatch(identifier: &str, kind: &str, cited: &str, actual: &str) {
    tracing::warn!(
        event = "citation_mismatch",
        identifier = %identifier,
        kind = %kind,
        cited = %cited,
        actual = %actual,
        "citation does not match registry record"
    );
}

/// Log a failed registry lookup.
pub fn registry_failure(registry: &str, identifier: &str, error: &str) {
    tracing::warn!(
        event = "registry_failure",
        registry = %registry,
        identifier = %identifier,
        error = %error,
        "registry lookup failed"
    );
}

/// Log an identifier the registry has no record for.
pub fn registry_not_found(registry: &str, identifier: &str) {
    tracing::warn!(
        event = "registry_not_found",
        registry = %registry,
        identifier = %identifier,
        "identifier not found in registry"
    );
}

/// Log a registry lookup served from cache.
pub fn registry_cache_hit(identifier: &str) {
    tracing::trace!(event = "registry_cache_hit", identifier = %identifier, "registry cache hit");
}

/// Log an audit record written to disk.
pub fn audit_written(path: &Path) {
    tracing::debug!(event = "audit_written", path = %path.display(), "audit record written");
}

/// Log an audit record that could not be written.
pub fn audit_write_failed(session_id: &str, error: &str) {
    tracing::warn!(
        event = "audit_write_failed",
        session_id = %session_id,
        error = %error,
        "failed to write audit record"
    );
}

/// Log a retention sweep over the audit directory.
pub fn logs_pruned(dir: &Path, removed: usize, kept: usize) {
    tracing::info!(
        event = "logs_pruned",
        dir = %dir.display(),
        removed = removed,
        kept = kept,
        "audit logs pruned"
    );
}
