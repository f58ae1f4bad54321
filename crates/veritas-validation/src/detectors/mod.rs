//! Independent line-scanning detectors.
//!
//! Each detector is a pure function of the document (and the rule table);
//! none performs I/O and none can fail. Findings carry their own severity;
//! the engine splits errors from warnings.

pub mod claims;
pub mod formatting;
pub mod hedges;
pub mod style;
pub mod verification_level;

use veritas_core::config::PolicyRule;
use veritas_core::models::{Document, Violation};

use crate::rules::RuleSet;

/// A detector bound to the policy rule that enables and enforces it.
pub trait Detector {
    /// Policy rule governing this detector.
    fn rule(&self) -> PolicyRule;

    /// Scan the document and return every finding.
    fn detect(&self, document: &Document, rules: &RuleSet) -> Vec<Violation>;
}

/// Tracks fenced code blocks across lines.
///
/// A line starting with the fence marker toggles the state; the marker line
/// itself counts as fenced.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    inside: bool,
}

pub(crate) const FENCE_MARKER: &str = "```";

impl FenceTracker {
    /// Feed the next line; returns true if it belongs to a code block.
    pub(crate) fn is_fenced(&mut self, line: &str) -> bool {
        if line.starts_with(FENCE_MARKER) {
            self.inside = !self.inside;
            return true;
        }
        self.inside
    }
}

/// All built-in detectors, in reporting order.
pub fn all() -> Vec<Box<dyn Detector>> {
    vec![
        Box::new(claims::ClaimDetector),
        Box::new(verification_level::VerificationLevelDetector),
        Box::new(formatting::FormattingLinter),
        Box::new(hedges::UnsupportedClaimDetector),
        Box::new(style::WritingStyleDetector),
    ]
}

#[cfg(test)]
mod tests {
    use super::FenceTracker;

    #[test]
    fn fence_covers_whole_block() {
        let mut fence = FenceTracker::default();
        let flags: Vec<bool> = ["a", "```rust", "b", "c", "```", "d"]
            .iter()
            .map(|l| fence.is_fenced(l))
            .collect();
        assert_eq!(flags, vec![false, true, true, true, true, false]);
    }
}
