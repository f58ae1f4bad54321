//! Bibliographic registry errors.
//!
//! The registry verifier never propagates these; it converts them into
//! `identifier_not_found` violations. They exist so client implementations
//! can report what went wrong.

use super::error_code::{self, VeritasErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("registry request for {identifier} failed: {reason}")]
    Network { identifier: String, reason: String },

    #[error("registry request for {identifier} timed out after {timeout_secs}s")]
    Timeout { identifier: String, timeout_secs: u64 },

    #[error("registry returned HTTP {status} for {identifier}")]
    HttpStatus { identifier: String, status: u16 },

    #[error("malformed registry response for {identifier}: {reason}")]
    MalformedResponse { identifier: String, reason: String },

    #[error("registry client unavailable: {reason}")]
    Unavailable { reason: String },
}

impl VeritasErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            RegistryError::Timeout { .. } => error_code::REGISTRY_TIMEOUT,
            _ => error_code::REGISTRY_ERROR,
        }
    }
}
