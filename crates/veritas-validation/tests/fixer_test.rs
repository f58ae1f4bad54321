//! Formatting fixer: fixes what the linter reports, and is idempotent.

use proptest::prelude::*;
use veritas_core::models::{ContentKind, Document};
use veritas_validation::detectors::formatting::{pipe_lacks_spacing, FormattingLinter};
use veritas_validation::detectors::Detector;
use veritas_validation::fixer::{fix_document, fix_formatting, fix_wiki_links};
use veritas_validation::RuleSet;

#[test]
fn escaped_newlines_become_real_ones() {
    assert_eq!(fix_formatting("one\\ntwo"), "one\ntwo");
}

#[test]
fn html_entities_are_decoded() {
    assert_eq!(fix_formatting("a &gt; b &lt; c &amp; d"), "a > b < c & d");
}

#[test]
fn wiki_links_only_touch_plain_names() {
    assert_eq!(fix_wiki_links("[[Blood Pressure]]"), "[[Blood_Pressure]]");
    assert_eq!(fix_wiki_links("[[Note 2]]"), "[[Note 2]]");
}

#[test]
fn fixed_fixture_only_keeps_heading_defect() {
    let fixed = fix_document(&test_fixtures::documents::messy_formatting());
    assert!(fixed.contains("| Marker | Cutoff |"));
    assert!(fixed.contains("[[Reference_Ranges]]"));

    let findings = FormattingLinter.detect(
        &Document::new(fixed, ContentKind::Markdown),
        &RuleSet::builtin(),
    );
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.starts_with("H1 heading"));
}

#[test]
fn fixed_adjacent_pipes_pass_the_linter() {
    let fixed = fix_formatting("| a || b |");
    assert!(!pipe_lacks_spacing(&fixed), "still crowded: {fixed}");
}

#[test]
fn fixing_twice_changes_nothing() {
    let once = fix_document(&test_fixtures::documents::messy_formatting());
    assert_eq!(fix_document(&once), once);
}

proptest! {
    #[test]
    fn fixed_table_rows_need_no_spacing(cells in prop::collection::vec("[a-z0-9]{1,6}", 1..6)) {
        let row = format!("|{}|", cells.join("|"));
        let fixed = fix_formatting(&row);
        prop_assert!(!pipe_lacks_spacing(&fixed), "still crowded: {}", fixed);
        prop_assert_eq!(fix_formatting(&fixed), fixed.clone());
    }
}
