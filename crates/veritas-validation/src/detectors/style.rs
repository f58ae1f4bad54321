//! Writing-style advisories.

use veritas_core::config::PolicyRule;
use veritas_core::constants::EXCERPT_MAX_CHARS;
use veritas_core::models::{truncate_chars, Document, Violation};

use super::{Detector, FenceTracker};
use crate::rules::{RuleCategory, RuleSet};

/// Warns once per (line, rule) for discouraged wording outside code blocks.
pub struct WritingStyleDetector;

impl Detector for WritingStyleDetector {
    fn rule(&self) -> PolicyRule {
        PolicyRule::WritingStyle
    }

    fn detect(&self, document: &Document, rules: &RuleSet) -> Vec<Violation> {
        let mut warnings = Vec::new();
        let mut fence = FenceTracker::default();

        for (line_no, line) in document.lines() {
            if fence.is_fenced(line) {
                continue;
            }
            for rule in rules.category(RuleCategory::WritingStyle) {
                if rule.is_match(line) {
                    let excerpt = truncate_chars(line, EXCERPT_MAX_CHARS);
                    warnings.push(Violation::warning(
                        rule.kind(),
                        Some(line_no),
                        excerpt.clone(),
                        format!("{}: {excerpt}", rule.label),
                    ));
                }
            }
        }

        warnings
    }
}
