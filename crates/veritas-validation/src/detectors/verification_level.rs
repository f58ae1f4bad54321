//! Verification-level check: cited documents should say how far each
//! citation was checked.

use veritas_core::config::PolicyRule;
use veritas_core::constants::VERIFICATION_LEVEL_TAGS;
use veritas_core::models::{Document, Violation, ViolationKind};

use super::Detector;
use crate::grammar;
use crate::rules::RuleSet;

pub struct VerificationLevelDetector;

impl Detector for VerificationLevelDetector {
    fn rule(&self) -> PolicyRule {
        PolicyRule::VerificationLevels
    }

    fn detect(&self, document: &Document, _rules: &RuleSet) -> Vec<Violation> {
        let content = document.content();
        if !grammar::has_identifier_marker(content) {
            return Vec::new();
        }
        if VERIFICATION_LEVEL_TAGS.iter().any(|tag| content.contains(tag)) {
            return Vec::new();
        }
        vec![Violation::warning(
            ViolationKind::MissingVerificationLevel,
            None,
            String::new(),
            format!(
                "Citations present but no verification levels found (expected one of {})",
                VERIFICATION_LEVEL_TAGS.join(", ")
            ),
        )]
    }
}
