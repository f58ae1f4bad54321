//! Formatting linter for markdown documents.

use std::sync::LazyLock;

use regex::Regex;
use veritas_core::config::PolicyRule;
use veritas_core::constants::{EXCERPT_MAX_CHARS, TABLE_EXCERPT_MAX_CHARS};
use veritas_core::models::{truncate_chars, Document, Violation, ViolationKind};

use super::Detector;
use crate::rules::RuleSet;

/// Top-level heading containing an underscore.
static H1_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+.*_.*$").unwrap());

const ESCAPED_NEWLINE: &str = "\\n";
const HTML_ENTITIES: [&str; 2] = ["&gt;", "&lt;"];

/// Structural checks that only apply to markdown. Plain text yields nothing.
pub struct FormattingLinter;

impl Detector for FormattingLinter {
    fn rule(&self) -> PolicyRule {
        PolicyRule::ObsidianFormatting
    }

    fn detect(&self, document: &Document, _rules: &RuleSet) -> Vec<Violation> {
        if !document.kind().is_markdown() {
            return Vec::new();
        }

        let mut findings = Vec::new();

        if let Some((line_no, line)) = first_line_containing(document, &[ESCAPED_NEWLINE]) {
            findings.push(Violation::error(
                ViolationKind::FormattingDefect,
                Some(line_no),
                truncate_chars(line, EXCERPT_MAX_CHARS),
                "Contains escaped newlines (\\n)",
            ));
        }

        if let Some((line_no, line)) = first_line_containing(document, &HTML_ENTITIES) {
            findings.push(Violation::error(
                ViolationKind::FormattingDefect,
                Some(line_no),
                truncate_chars(line, EXCERPT_MAX_CHARS),
                "Contains HTML entities (&gt; or &lt;)",
            ));
        }

        for (line_no, line) in document.lines() {
            if H1_UNDERSCORE_RE.is_match(line) {
                findings.push(Violation::error(
                    ViolationKind::FormattingDefect,
                    Some(line_no),
                    truncate_chars(line, EXCERPT_MAX_CHARS),
                    format!("H1 heading contains underscore: {line}"),
                ));
            }
        }

        for (line_no, line) in document.lines() {
            if line.contains('|') && pipe_lacks_spacing(line) {
                let excerpt = truncate_chars(line, TABLE_EXCERPT_MAX_CHARS);
                findings.push(Violation::warning(
                    ViolationKind::FormattingDefect,
                    Some(line_no),
                    excerpt.clone(),
                    format!("Table may need spaces around pipes: {excerpt}"),
                ));
            }
        }

        findings
    }
}

fn first_line_containing<'a>(document: &'a Document, needles: &[&str]) -> Option<(usize, &'a str)> {
    document
        .lines()
        .find(|(_, line)| needles.iter().any(|n| line.contains(n)))
}

/// True if some pipe touches a non-whitespace character, another pipe
/// included. Line boundaries count as spacing.
pub fn pipe_lacks_spacing(line: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    let crowds = |c: Option<&char>| c.is_some_and(|c| !c.is_whitespace());

    chars.iter().enumerate().any(|(i, &c)| {
        c == '|' && (crowds(i.checked_sub(1).and_then(|p| chars.get(p))) || crowds(chars.get(i + 1)))
    })
}

#[cfg(test)]
mod tests {
    use super::pipe_lacks_spacing;

    #[test]
    fn spaced_tables_pass() {
        assert!(!pipe_lacks_spacing("| a | b |"));
        assert!(!pipe_lacks_spacing("| --- | --- |"));
    }

    #[test]
    fn crowded_pipes_are_flagged() {
        assert!(pipe_lacks_spacing("|a | b |"));
        assert!(pipe_lacks_spacing("| a| b |"));
        assert!(pipe_lacks_spacing("|---|---|"));
        assert!(pipe_lacks_spacing("| a || b |"));
    }
}
