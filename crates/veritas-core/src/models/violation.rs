use serde::{Deserialize, Serialize};

/// What a detector found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Claim-bearing line without a well-formed citation token.
    MissingCitation,
    /// Cited first author does not match the registry record.
    AuthorMismatch,
    /// Cited year does not match the registry record.
    YearMismatch,
    /// Registry lookup failed or the identifier is unknown.
    IdentifierNotFound,
    /// Structural or formatting defect in a markdown document.
    FormattingDefect,
    /// Hedge phrase ("studies show", ...) without an adjacent citation.
    UnsupportedClaim,
    /// Citations present but no verification-level tag.
    MissingVerificationLevel,
    /// Em dash or dramatic wording.
    WritingStyle,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingCitation => "missing_citation",
            ViolationKind::AuthorMismatch => "author_mismatch",
            ViolationKind::YearMismatch => "year_mismatch",
            ViolationKind::IdentifierNotFound => "identifier_not_found",
            ViolationKind::FormattingDefect => "formatting_defect",
            ViolationKind::UnsupportedClaim => "unsupported_claim",
            ViolationKind::MissingVerificationLevel => "missing_verification_level",
            ViolationKind::WritingStyle => "writing_style",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A single finding produced by exactly one detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: Severity,
    /// 1-based line number, when the finding is line-local.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub excerpt: String,
    pub message: String,
}

impl Violation {
    pub fn error(
        kind: ViolationKind,
        line: Option<usize>,
        excerpt: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            line,
            excerpt: excerpt.into(),
            message: message.into(),
        }
    }

    pub fn warning(
        kind: ViolationKind,
        line: Option<usize>,
        excerpt: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            line,
            excerpt: excerpt.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// First `max_chars` characters of `text`, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
