//! VeritasErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured error code
/// string for JSON output and audit records.
pub trait VeritasErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const REGISTRY_ERROR: &str = "REGISTRY_ERROR";
pub const REGISTRY_TIMEOUT: &str = "REGISTRY_TIMEOUT";
pub const AUDIT_ERROR: &str = "AUDIT_ERROR";
pub const RULE_ERROR: &str = "RULE_ERROR";
