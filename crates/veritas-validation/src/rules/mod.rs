//! Ordered rule table of lexical detection patterns.
//!
//! Detectors iterate the rules of their category instead of hard-coding
//! lexicons, so new claim indicators or hedge phrases are added by pushing
//! rules (or loading a TOML rule file) without touching control flow.

pub mod builtin;
pub mod loader;

use regex::Regex;
use serde::{Deserialize, Serialize};
use veritas_core::errors::RuleError;
use veritas_core::models::ViolationKind;

pub use loader::RuleLoader;

/// Which detector consumes a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    /// Empirical/statistical claim indicator; consumed by the claim detector.
    ClaimIndicator,
    /// Hedge phrase; consumed by the unsupported-claim detector.
    HedgePhrase,
    /// Discouraged wording; consumed by the writing-style detector.
    WritingStyle,
}

impl RuleCategory {
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "claim_indicator" => Some(RuleCategory::ClaimIndicator),
            "hedge_phrase" => Some(RuleCategory::HedgePhrase),
            "writing_style" => Some(RuleCategory::WritingStyle),
            _ => None,
        }
    }

    /// The violation kind a match in this category produces.
    pub fn violation_kind(&self) -> ViolationKind {
        match self {
            RuleCategory::ClaimIndicator => ViolationKind::MissingCitation,
            RuleCategory::HedgePhrase => ViolationKind::UnsupportedClaim,
            RuleCategory::WritingStyle => ViolationKind::WritingStyle,
        }
    }
}

/// A compiled lexical rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub id: String,
    pub category: RuleCategory,
    /// Short phrase used in violation messages, e.g. "studies show".
    pub label: String,
    pub regex: Regex,
}

impl PatternRule {
    pub fn new(
        id: impl Into<String>,
        category: RuleCategory,
        label: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, RuleError> {
        let id = id.into();
        let regex = Regex::new(pattern).map_err(|e| {
            RuleError::PatternCompilationFailed(format!("regex error in rule '{id}': {e}"))
        })?;
        Ok(Self {
            id,
            category,
            label: label.into(),
            regex,
        })
    }

    pub fn kind(&self) -> ViolationKind {
        self.category.violation_kind()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// An ordered collection of rules. Order is preserved within a category.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
}

impl RuleSet {
    /// The built-in lexicons.
    pub fn builtin() -> Self {
        Self {
            rules: builtin::BUILTIN_RULES.clone(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a rule, replacing any existing rule with the same id in place.
    pub fn push(&mut self, rule: PatternRule) {
        if let Some(existing) = self.rules.iter_mut().find(|r| r.id == rule.id) {
            *existing = rule;
        } else {
            self.rules.push(rule);
        }
    }

    /// Add the rules defined in a TOML string.
    pub fn extend_from_toml(&mut self, toml_str: &str) -> Result<(), RuleError> {
        for rule in RuleLoader::load_from_str(toml_str)? {
            self.push(rule);
        }
        Ok(())
    }

    pub fn category(&self, category: RuleCategory) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter().filter(move |r| r.category == category)
    }

    pub fn get(&self, id: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
