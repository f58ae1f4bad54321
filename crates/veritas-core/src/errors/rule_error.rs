//! Detection rule errors.

use super::error_code::{self, VeritasErrorCode};

/// Errors that can occur while loading or compiling detection rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Pattern compilation failed: {0}")]
    PatternCompilationFailed(String),
}

impl VeritasErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_ERROR
    }
}
