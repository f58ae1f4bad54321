//! Built-in claim indicators, hedge phrases and style rules.

use std::sync::LazyLock;

use super::{PatternRule, RuleCategory};

/// (id, category, label, pattern). All patterns are case-insensitive.
const BUILTIN_DEFS: &[(&str, RuleCategory, &str, &str)] = &[
    // Claim indicators
    (
        "claim.percentage",
        RuleCategory::ClaimIndicator,
        "percentage",
        r"(?i)\b\d+(?:\.\d+)?%",
    ),
    (
        "claim.comparison",
        RuleCategory::ClaimIndicator,
        "comparison or association",
        r"(?i)\b(?:increased?|decreased?|associated?|correlated?|significant)\b",
    ),
    (
        "claim.epidemiology",
        RuleCategory::ClaimIndicator,
        "epidemiological measure",
        r"(?i)\b(?:incidence|prevalence|rate|risk|odds|hazard|ratio)\b",
    ),
    (
        "claim.p_value",
        RuleCategory::ClaimIndicator,
        "p-value",
        r"(?i)\bp\s*[<=]\s*0\.\d+\b",
    ),
    (
        "claim.sample_size",
        RuleCategory::ClaimIndicator,
        "sample size",
        r"(?i)\bn\s*=\s*\d+\b",
    ),
    // Hedge phrases
    (
        "hedge.it_is_known",
        RuleCategory::HedgePhrase,
        "it is known",
        r"(?i)\bit is (?:well )?known\b",
    ),
    (
        "hedge.studies_show",
        RuleCategory::HedgePhrase,
        "studies show",
        r"(?i)\bstudies show\b",
    ),
    (
        "hedge.research_indicates",
        RuleCategory::HedgePhrase,
        "research indicates",
        r"(?i)\bresearch indicates\b",
    ),
    (
        "hedge.evidence_suggests",
        RuleCategory::HedgePhrase,
        "evidence suggests",
        r"(?i)\bevidence suggests\b",
    ),
    (
        "hedge.has_been_shown",
        RuleCategory::HedgePhrase,
        "has been shown",
        r"(?i)\bhas been shown\b",
    ),
    (
        "hedge.data_demonstrates",
        RuleCategory::HedgePhrase,
        "data demonstrates",
        r"(?i)\bdata demonstrates?\b",
    ),
    // Writing style
    ("style.em_dash", RuleCategory::WritingStyle, "em dash", "\u{2014}"),
    (
        "style.dramatic",
        RuleCategory::WritingStyle,
        "dramatic language",
        r"(?i)\b(?:crucial|vital|revolutionary)\b",
    ),
];

pub(crate) static BUILTIN_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    BUILTIN_DEFS
        .iter()
        .map(|(id, category, label, pattern)| {
            PatternRule::new(*id, *category, *label, pattern).unwrap()
        })
        .collect()
});
