//! Unsupported-claim detector: hedge phrases need an adjacent identifier.

use veritas_core::config::PolicyRule;
use veritas_core::constants::EXCERPT_MAX_CHARS;
use veritas_core::models::{truncate_chars, Document, Violation, ViolationKind};

use super::Detector;
use crate::grammar;
use crate::rules::{RuleCategory, RuleSet};

/// Flags every hedge phrase on a line unless an identifier marker appears on
/// that line or the one after it (citations may wrap).
pub struct UnsupportedClaimDetector;

impl Detector for UnsupportedClaimDetector {
    fn rule(&self) -> PolicyRule {
        PolicyRule::UnsupportedClaims
    }

    fn detect(&self, document: &Document, rules: &RuleSet) -> Vec<Violation> {
        let lines: Vec<&str> = document.lines().map(|(_, l)| l).collect();
        let mut violations = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            let supported = grammar::has_identifier_marker(line)
                || lines
                    .get(idx + 1)
                    .is_some_and(|next| grammar::has_identifier_marker(next));
            if supported {
                continue;
            }

            for rule in rules.category(RuleCategory::HedgePhrase) {
                if rule.is_match(line) {
                    violations.push(Violation::error(
                        ViolationKind::UnsupportedClaim,
                        Some(idx + 1),
                        truncate_chars(line, EXCERPT_MAX_CHARS),
                        format!("\"{}\" without citation", rule.label),
                    ));
                }
            }
        }

        violations
    }
}
