//! Citation grammar: the citation token shape and its extraction pattern.
//!
//! A well-formed token looks like `(Smith et al., 2020, PMID: 12345678)`;
//! the marker may be `PMID:` or `ID:` and `et al.` is optional. The
//! well-formed check wants exactly eight identifier digits while extraction
//! accepts any digit count, so a token with a short identifier does not
//! count as "cited" for the claim detector but is still extracted for
//! registry verification.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use veritas_core::constants::WELL_FORMED_IDENTIFIER_DIGITS;
use veritas_core::models::Citation;

/// A complete, well-formed citation token.
static WELL_FORMED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\([A-Z][A-Za-z]+(?: et al\.)?, [0-9]{{4}}, (?:PM)?ID: [0-9]{{{WELL_FORMED_IDENTIFIER_DIGITS}}}\)"
    ))
    .unwrap()
});

/// Lenient extraction pattern: author, four-digit year, any-length identifier.
static EXTRACT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([^,]+?)(?:\s+et\s+al\.)?,\s+([0-9]{4}),\s+(?:PM)?ID:\s+([0-9]+)\)").unwrap()
});

/// Identifier marker looked for near hedge phrases.
pub const IDENTIFIER_MARKER: &str = "ID:";

/// Whether `text` contains a well-formed citation token.
pub fn has_well_formed_citation(text: &str) -> bool {
    WELL_FORMED_RE.is_match(text)
}

/// Whether `text` carries an identifier marker (`ID:` or `PMID:`).
pub fn has_identifier_marker(text: &str) -> bool {
    text.contains(IDENTIFIER_MARKER)
}

/// Extract citations from `text`, de-duplicated by value in first-seen order.
pub fn extract_citations(text: &str) -> Vec<Citation> {
    let mut seen = HashSet::new();
    let mut citations = Vec::new();

    for caps in EXTRACT_RE.captures_iter(text) {
        let Some(citation) = Citation::try_new(&caps[1], &caps[2], &caps[3]) else {
            continue;
        };
        if seen.insert(citation.clone()) {
            citations.push(citation);
        }
    }

    citations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn et_al_is_optional_in_well_formed_tokens() {
        assert!(has_well_formed_citation("x (Smith, 2020, ID: 12345678)"));
        assert!(has_well_formed_citation("x (Smith et al., 2020, PMID: 12345678)"));
    }

    #[test]
    fn seven_digit_identifier_is_not_well_formed_but_extracts() {
        let text = "Risk fell (Smith et al., 2020, PMID: 1234567)";
        assert!(!has_well_formed_citation(text));
        assert_eq!(extract_citations(text).len(), 1);
    }

    #[test]
    fn lowercase_surname_is_not_well_formed() {
        assert!(!has_well_formed_citation("(smith et al., 2020, ID: 12345678)"));
    }
}
