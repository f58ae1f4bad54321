//! Enforcement policy: which rules run and whether their violations block.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// What to do when a rule reports a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationAction {
    #[default]
    Warn,
    Block,
}

impl ViolationAction {
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Some(ViolationAction::Warn),
            "block" => Some(ViolationAction::Block),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationAction::Warn => "warn",
            ViolationAction::Block => "block",
        }
    }
}

/// The named rules a policy can configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyRule {
    /// Claim detector: claims need a well-formed citation.
    PmidCitations,
    /// Formatting linter for markdown documents.
    ObsidianFormatting,
    /// Hedge phrases without a citation.
    UnsupportedClaims,
    /// Verification-level tags on cited documents.
    VerificationLevels,
    /// Em dashes and dramatic wording.
    WritingStyle,
}

impl PolicyRule {
    pub const ALL: [PolicyRule; 5] = [
        PolicyRule::PmidCitations,
        PolicyRule::ObsidianFormatting,
        PolicyRule::UnsupportedClaims,
        PolicyRule::VerificationLevels,
        PolicyRule::WritingStyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyRule::PmidCitations => "pmid_citations",
            PolicyRule::ObsidianFormatting => "obsidian_formatting",
            PolicyRule::UnsupportedClaims => "unsupported_claims",
            PolicyRule::VerificationLevels => "verification_levels",
            PolicyRule::WritingStyle => "writing_style",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleEnforcement {
    pub action_on_violation: ViolationAction,
}

/// Per-rule settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulePolicy {
    pub enabled: bool,
    pub enforcement: RuleEnforcement,
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            enforcement: RuleEnforcement::default(),
        }
    }
}

/// Enforcement policy, in the `verification.json` layout:
///
/// ```json
/// { "verification_rules": { "pmid_citations": { "enabled": true,
///     "enforcement": { "action_on_violation": "block" } } } }
/// ```
///
/// Rules absent from the map use [`RulePolicy::default`]: enabled, warn.
/// Unknown rule names are kept but ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationPolicy {
    pub verification_rules: BTreeMap<String, RulePolicy>,
}

impl VerificationPolicy {
    /// Effective settings for `rule`.
    pub fn rule(&self, rule: PolicyRule) -> RulePolicy {
        self.verification_rules
            .get(rule.as_str())
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_enabled(&self, rule: PolicyRule) -> bool {
        self.rule(rule).enabled
    }

    pub fn action(&self, rule: PolicyRule) -> ViolationAction {
        self.rule(rule).enforcement.action_on_violation
    }

    pub fn set_enabled(&mut self, rule: PolicyRule, enabled: bool) {
        self.entry(rule).enabled = enabled;
    }

    pub fn set_action(&mut self, rule: PolicyRule, action: ViolationAction) {
        self.entry(rule).enforcement.action_on_violation = action;
    }

    fn entry(&mut self, rule: PolicyRule) -> &mut RulePolicy {
        self.verification_rules
            .entry(rule.as_str().to_string())
            .or_default()
    }

    /// Overlay `other` on `self`: rules named in `other` replace ours.
    pub fn merge(&mut self, other: &VerificationPolicy) {
        for (name, rule) in &other.verification_rules {
            self.verification_rules.insert(name.clone(), rule.clone());
        }
    }

    /// Parse a policy from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }
}
