//! Tests for the shared data model.

use proptest::prelude::*;
use veritas_core::models::{
    truncate_chars, Citation, ContentKind, Document, RegistryRecord, Severity, Verdict,
    VerificationReport, Violation, ViolationKind,
};

#[test]
fn citation_rejects_malformed_parts() {
    assert!(Citation::try_new("Smith", "2020", "12345678").is_some());
    assert!(Citation::try_new("Smith", "20", "1").is_none());
    assert!(Citation::try_new("Smith", "2020", "12a4").is_none());
    assert!(Citation::try_new("Smith", "2020", "").is_none());
    assert!(Citation::try_new("  ", "2020", "1").is_none());
}

#[test]
fn citation_trims_author_and_displays() {
    let c = Citation::try_new(" Lee ", "2019", "1").unwrap();
    assert_eq!(c.author(), "Lee");
    assert_eq!(c.to_string(), "Lee et al., 2019, PMID: 1");
}

#[test]
fn content_kind_inference() {
    assert_eq!(ContentKind::infer("plain", Some("note.md")), ContentKind::Markdown);
    assert_eq!(ContentKind::infer("# Title", None), ContentKind::Markdown);
    assert_eq!(ContentKind::infer("plain", Some("note.txt")), ContentKind::Text);
    assert_eq!(ContentKind::parse_str("Markdown"), Some(ContentKind::Markdown));
    assert_eq!(ContentKind::parse_str("plain"), Some(ContentKind::Text));
    assert_eq!(ContentKind::parse_str("html"), None);
}

#[test]
fn document_lines_are_one_based() {
    let doc = Document::new("a\nb\n", ContentKind::Text);
    let lines: Vec<_> = doc.lines().collect();
    assert_eq!(lines, vec![(1, "a"), (2, "b"), (3, "")]);
    assert_eq!(doc.len(), 4);
}

#[test]
fn registry_record_tokens() {
    let record = RegistryRecord {
        identifier: "1".into(),
        authors: vec!["Smith JA".into(), "Doe B".into()],
        pubdate: "2020 Mar 15".into(),
        title: "T".into(),
    };
    assert_eq!(record.first_author_surname(), Some("Smith"));
    assert_eq!(record.publication_year(), "2020");

    let empty = RegistryRecord {
        identifier: "2".into(),
        authors: vec![],
        pubdate: String::new(),
        title: String::new(),
    };
    assert_eq!(empty.first_author_surname(), None);
    assert_eq!(empty.publication_year(), "");
}

#[test]
fn truncate_respects_char_boundaries() {
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("ab", 10), "ab");
}

#[test]
fn report_serializes_snake_case_kinds() {
    let report = VerificationReport::new(
        "s1",
        None,
        vec![Violation::error(ViolationKind::MissingCitation, Some(3), "x", "y")],
        vec![],
        10,
    );
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["violations"][0]["kind"], "missing_citation");
    assert_eq!(json["violations"][0]["severity"], "error");
    assert_eq!(json["passed"], false);
    assert_eq!(json["content_length"], 10);
    assert_eq!(report.timestamp_key().len(), "20240101_120000".len());
}

#[test]
fn verdict_exit_codes() {
    assert_eq!(Verdict::Pass.exit_code(), 0);
    assert_eq!(Verdict::Warn.exit_code(), 0);
    assert_eq!(Verdict::Block.exit_code(), 1);
}

fn arb_violation() -> impl Strategy<Value = Violation> {
    (any::<bool>(), proptest::option::of(1usize..500), ".{0,20}").prop_map(
        |(is_error, line, text)| {
            if is_error {
                Violation::error(ViolationKind::UnsupportedClaim, line, text.clone(), text)
            } else {
                Violation::warning(ViolationKind::FormattingDefect, line, text.clone(), text)
            }
        },
    )
}

proptest! {
    #[test]
    fn passed_iff_no_violations(
        violations in proptest::collection::vec(arb_violation(), 0..8),
        warnings in proptest::collection::vec(arb_violation(), 0..8),
        len in 0usize..10_000,
    ) {
        let expected = violations.is_empty();
        let report = VerificationReport::new("s", None, violations, warnings, len);
        prop_assert_eq!(report.passed(), expected);
        prop_assert_eq!(report.passed(), report.violations().is_empty());
    }

    #[test]
    fn well_formed_years_always_accepted(year in 1000u32..9999, id in 1u64..99_999_999) {
        let c = Citation::try_new("Kim", year.to_string(), id.to_string());
        prop_assert!(c.is_some());
    }
}

#[test]
fn severity_strings() {
    assert_eq!(Severity::Error.as_str(), "error");
    assert_eq!(Severity::Warning.as_str(), "warning");
}
