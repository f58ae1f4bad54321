//! Human-readable summary of a verification report.
//!
//! The summary truncates (first 5 violations, first 3 warnings); the report
//! and its audit record always keep the full lists.

use std::fmt::Write;

use veritas_core::constants::{SUMMARY_MAX_VIOLATIONS, SUMMARY_MAX_WARNINGS};
use veritas_core::models::{Verdict, VerificationReport, Violation, ViolationKind};

const RULE: &str = "==================================================";

/// Render the console summary for one report.
pub fn render(report: &VerificationReport, verdict: Verdict) -> String {
    let mut out = String::new();

    out.push_str("Research Output Verification\n");
    out.push_str(RULE);
    out.push('\n');
    if let Some(name) = report.filename() {
        let _ = writeln!(out, "File: {name}");
    }

    if report.violations().is_empty() && report.warnings().is_empty() {
        out.push_str("All checks passed.\n");
        out.push_str(RULE);
        out.push('\n');
        return out;
    }

    let violations = report.violations();
    if !violations.is_empty() {
        let _ = writeln!(out, "\nFound {} violation(s):", violations.len());
        for v in violations.iter().take(SUMMARY_MAX_VIOLATIONS) {
            let _ = writeln!(out, "  - {}", describe(v));
        }
        if violations.len() > SUMMARY_MAX_VIOLATIONS {
            let _ = writeln!(
                out,
                "  ... and {} more",
                violations.len() - SUMMARY_MAX_VIOLATIONS
            );
        }
    }

    let warnings = report.warnings();
    if !warnings.is_empty() {
        let _ = writeln!(out, "\nFound {} warning(s):", warnings.len());
        for w in warnings.iter().take(SUMMARY_MAX_WARNINGS) {
            let _ = writeln!(out, "  - {}: {}", w.kind, w.message);
        }
    }

    let actions = required_actions(report);
    if !actions.is_empty() {
        out.push_str("\nRequired Actions:\n");
        for (i, action) in actions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {action}", i + 1);
        }
    }

    if verdict.is_blocking() {
        out.push_str("\nOutput blocked due to violations. Please fix and retry.\n");
    }

    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    out
}

fn describe(v: &Violation) -> String {
    let line = v
        .line
        .map(|l| l.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    if v.excerpt.is_empty() {
        format!("Line {line}: {} - {}", v.kind, v.message)
    } else {
        format!("Line {line}: {} - {} ({})", v.kind, v.message, v.excerpt)
    }
}

fn required_actions(report: &VerificationReport) -> Vec<&'static str> {
    let has = |kind: ViolationKind| report.violations().iter().any(|v| v.kind == kind);
    let mut actions = Vec::new();
    if has(ViolationKind::MissingCitation) {
        actions.push("Add PMID citations for all empirical claims");
    }
    if has(ViolationKind::UnsupportedClaim) {
        actions.push("Cite a source next to each general claim");
    }
    if has(ViolationKind::FormattingDefect) {
        actions.push("Fix markdown formatting issues (try `veritas fix`)");
    }
    if report
        .warnings()
        .iter()
        .any(|w| w.kind == ViolationKind::MissingVerificationLevel)
    {
        actions.push("Add verification levels to citations");
    }
    actions
}
