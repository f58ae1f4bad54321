//! # veritas-validation
//!
//! Rule-based verification of research notes.
//!
//! ## Detectors
//! 1. **Claims**: claim-bearing prose lines need a well-formed citation
//! 2. **Hedges**: "studies show" and friends need an adjacent identifier
//! 3. **Formatting**: escaped newlines, HTML entities, H1 underscores, table pipes
//! 4. **Verification levels**: cited documents should carry a level tag
//! 5. **Writing style**: em dashes and dramatic wording
//!
//! Detectors are independent and never fail; the [`VerificationEngine`]
//! aggregates their findings, applies the enforcement policy, and records
//! one audit entry per document through the [`VerificationSession`].

pub mod detectors;
pub mod engine;
pub mod fixer;
pub mod grammar;
pub mod rules;
pub mod session;
pub mod summary;

pub use engine::{VerificationEngine, VerificationOutcome};
pub use rules::{PatternRule, RuleCategory, RuleSet};
pub use session::{SessionSummary, VerificationSession};
