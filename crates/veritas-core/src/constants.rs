/// Veritas version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Characters kept from a flagged line in a violation excerpt.
pub const EXCERPT_MAX_CHARS: usize = 100;

/// Characters kept from a table line in a table-spacing warning.
pub const TABLE_EXCERPT_MAX_CHARS: usize = 50;

/// Violations shown in the human-readable summary before truncation.
pub const SUMMARY_MAX_VIOLATIONS: usize = 5;

/// Warnings shown in the human-readable summary before truncation.
pub const SUMMARY_MAX_WARNINGS: usize = 3;

/// Digits required in the identifier of a well-formed citation token.
pub const WELL_FORMED_IDENTIFIER_DIGITS: usize = 8;

/// Tags that mark how far a citation has been checked against its source.
pub const VERIFICATION_LEVEL_TAGS: [&str; 3] =
    ["[FT-VERIFIED]", "[ABSTRACT-VERIFIED]", "[NEEDS-FT-REVIEW]"];

/// Audit log file prefix: `verification_<YYYYmmdd_HHMMSS>.json`.
pub const AUDIT_FILE_PREFIX: &str = "verification_";

/// Timestamp layout used in audit file names.
pub const AUDIT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Append-only log of registry verification runs.
pub const CITATION_LOG_FILENAME: &str = "citation_verification.log";
