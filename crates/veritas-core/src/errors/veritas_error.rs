//! Top-level error aggregating all subsystem errors via `From` conversions.

use super::error_code::VeritasErrorCode;
use super::{AuditError, ConfigError, InputError, RegistryError, RuleError};

#[derive(Debug, thiserror::Error)]
pub enum VeritasError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),
}

impl VeritasErrorCode for VeritasError {
    fn error_code(&self) -> &'static str {
        match self {
            VeritasError::Input(e) => e.error_code(),
            VeritasError::Config(e) => e.error_code(),
            VeritasError::Registry(e) => e.error_code(),
            VeritasError::Audit(e) => e.error_code(),
            VeritasError::Rule(e) => e.error_code(),
        }
    }
}

pub type VeritasResult<T> = Result<T, VeritasError>;
