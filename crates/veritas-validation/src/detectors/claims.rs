//! Claim detector: empirical or statistical claims need a citation.

use veritas_core::config::PolicyRule;
use veritas_core::constants::EXCERPT_MAX_CHARS;
use veritas_core::models::{truncate_chars, Document, Violation, ViolationKind};

use super::{Detector, FenceTracker};
use crate::grammar;
use crate::rules::{RuleCategory, RuleSet};

/// Flags prose lines that match a claim indicator but carry no well-formed
/// citation token. Headings, blank lines and fenced code are skipped.
/// At most one violation per line.
pub struct ClaimDetector;

impl Detector for ClaimDetector {
    fn rule(&self) -> PolicyRule {
        PolicyRule::PmidCitations
    }

    fn detect(&self, document: &Document, rules: &RuleSet) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut fence = FenceTracker::default();

        for (line_no, line) in document.lines() {
            if fence.is_fenced(line) || line.starts_with('#') || line.trim().is_empty() {
                continue;
            }

            let Some(indicator) = rules
                .category(RuleCategory::ClaimIndicator)
                .find(|r| r.is_match(line))
            else {
                continue;
            };

            if grammar::has_well_formed_citation(line) {
                continue;
            }

            violations.push(Violation::error(
                ViolationKind::MissingCitation,
                Some(line_no),
                truncate_chars(line, EXCERPT_MAX_CHARS),
                format!(
                    "{} without a citation (Author et al., Year, PMID: XXXXXXXX)",
                    indicator.label
                ),
            ));
        }

        violations
    }
}
