//! Audit log errors.

use super::error_code::{self, VeritasErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("audit log directory {path} unavailable: {reason}")]
    DirectoryUnavailable { path: String, reason: String },

    #[error("failed to write audit record {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    #[error("failed to serialize audit record: {reason}")]
    Serialization { reason: String },
}

impl VeritasErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        error_code::AUDIT_ERROR
    }
}
