//! # veritas-registry
//!
//! Checks extracted citations against a bibliographic registry: the cited
//! first author and year must match the record the identifier resolves to.
//!
//! [`PubMedRegistry`] talks to the NCBI E-utilities `esummary` endpoint;
//! [`CachedRegistry`] memoizes any registry; [`RegistryVerifier`] turns
//! lookups into verdicts and never lets a lookup failure escape.

pub mod cache;
pub mod pubmed;
pub mod verifier;

pub use cache::CachedRegistry;
pub use pubmed::PubMedRegistry;
pub use verifier::RegistryVerifier;
