//! Input errors: the only class that terminates a CLI run.

use super::error_code::{self, VeritasErrorCode};

/// Errors raised while acquiring the document to verify.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("no input supplied: pass a file path or --stdin")]
    NoInput,

    #[error("File {path} does not exist")]
    FileNotFound { path: String },

    #[error("failed to read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

impl VeritasErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
