//! Seams to the external collaborators the engine calls into.

pub mod audit_sink;
pub mod registry;

pub use audit_sink::IAuditSink;
pub use registry::IBibliographicRegistry;
