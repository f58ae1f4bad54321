//! # veritas-core
//!
//! Foundation crate for the Veritas verification engine.
//! Defines the document, citation, violation and report types, the
//! enforcement policy and runtime config, per-subsystem errors, and the
//! traits external collaborators (registry, audit sink) implement.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{VeritasConfig, VerificationPolicy};
pub use errors::{VeritasError, VeritasResult};
pub use models::{
    Citation, ContentKind, Document, Severity, Verdict, VerificationReport, Violation,
    ViolationKind,
};
