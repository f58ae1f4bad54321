//! # veritas-observability
//!
//! Structured logging setup, named log events, and the audit log that
//! keeps one JSON record per verified document.

pub mod audit;
pub mod tracing_setup;

pub use audit::{AuditLog, PruneSummary};
