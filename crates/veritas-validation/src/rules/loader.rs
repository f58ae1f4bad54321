//! Declarative TOML rule definitions, user-extensible without recompiling.
//!
//! ```toml
//! [[rules]]
//! id = "claim.odds_ratio"
//! category = "claim_indicator"
//! label = "odds ratio"
//! pattern = '(?i)\bOR\s*='
//! ```

use serde::{Deserialize, Serialize};
use veritas_core::errors::RuleError;

use super::{PatternRule, RuleCategory};

/// A TOML-defined rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlRuleDef {
    pub id: String,
    pub category: String,
    pub pattern: String,
    pub label: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlRuleFile {
    #[serde(default)]
    pub rules: Vec<TomlRuleDef>,
}

/// Loader for TOML rule definitions.
pub struct RuleLoader;

impl RuleLoader {
    /// Load rules from a TOML string. Disabled rules are skipped.
    pub fn load_from_str(toml_str: &str) -> Result<Vec<PatternRule>, RuleError> {
        let file: TomlRuleFile = toml::from_str(toml_str)
            .map_err(|e| RuleError::InvalidRule(format!("TOML parse error: {e}")))?;

        let mut rules = Vec::new();
        for def in file.rules {
            if def.enabled == Some(false) {
                continue;
            }
            rules.push(Self::compile(def)?);
        }
        Ok(rules)
    }

    /// Load rules from a file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Vec<PatternRule>, RuleError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RuleError::InvalidRule(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::load_from_str(&content)
    }

    fn compile(def: TomlRuleDef) -> Result<PatternRule, RuleError> {
        let category = RuleCategory::parse_str(&def.category).ok_or_else(|| {
            RuleError::InvalidRule(format!(
                "unknown category '{}' in rule '{}'",
                def.category, def.id
            ))
        })?;
        if def.pattern.is_empty() {
            return Err(RuleError::InvalidRule(format!(
                "empty pattern in rule '{}'",
                def.id
            )));
        }
        let label = def.label.unwrap_or_else(|| def.id.clone());
        PatternRule::new(def.id, category, label, &def.pattern)
    }
}
