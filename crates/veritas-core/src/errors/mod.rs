//! Error handling for Veritas.
//! One error enum per subsystem, `thiserror` only.
//!
//! Content violations are not errors: detectors always complete and report
//! findings as [`Violation`](crate::models::Violation)s. These enums cover
//! input, configuration, registry and audit failures.

pub mod audit_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod registry_error;
pub mod rule_error;
pub mod veritas_error;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use error_code::VeritasErrorCode;
pub use input_error::InputError;
pub use registry_error::RegistryError;
pub use rule_error::RuleError;
pub use veritas_error::{VeritasError, VeritasResult};
