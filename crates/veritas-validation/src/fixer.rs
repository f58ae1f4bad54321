//! Mechanical fixes for the formatting defects the linter reports.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::detectors::FENCE_MARKER;

static WIKI_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([A-Za-z\s]+)\]\]").unwrap());

/// Replace escaped newlines, pad table pipes, and decode HTML entities.
pub fn fix_formatting(content: &str) -> String {
    let content = content.replace("\\n", "\n");

    let content = content
        .split('\n')
        .map(|line| {
            if line.contains('|') && !line.starts_with(FENCE_MARKER) {
                pad_pipes(line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    content
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

/// Put one space on each side of every pipe that touches a non-whitespace
/// character. Adjacent pipes (`||`) become `| |`.
fn pad_pipes(line: &str) -> String {
    let mut padded = String::with_capacity(line.len() + 8);
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '|' {
            padded.push(c);
            continue;
        }
        if padded.chars().next_back().is_some_and(|p| !p.is_whitespace()) {
            padded.push(' ');
        }
        padded.push('|');
        if chars.peek().is_some_and(|n| !n.is_whitespace()) {
            padded.push(' ');
        }
    }

    padded
}

/// Use underscores instead of spaces inside `[[wiki links]]`.
pub fn fix_wiki_links(content: &str) -> String {
    WIKI_LINK_RE
        .replace_all(content, |caps: &Captures| {
            format!("[[{}]]", caps[1].replace(' ', "_"))
        })
        .into_owned()
}

/// Apply every fix.
pub fn fix_document(content: &str) -> String {
    fix_wiki_links(&fix_formatting(content))
}
