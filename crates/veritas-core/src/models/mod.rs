//! Data model shared by detectors, the registry verifier and the audit log.

pub mod citation;
pub mod citation_report;
pub mod document;
pub mod registry_record;
pub mod report;
pub mod violation;

pub use citation::Citation;
pub use citation_report::{CitationCheck, CitationVerificationReport, RegistryMismatch};
pub use document::{ContentKind, Document};
pub use registry_record::RegistryRecord;
pub use report::{Verdict, VerificationReport};
pub use violation::{truncate_chars, Severity, Violation, ViolationKind};
