//! Registry verification against an in-memory registry.

use std::io;
use std::sync::{Arc, Mutex};

use test_fixtures::{documents, record, StaticRegistry};
use veritas_core::models::ViolationKind;
use veritas_registry::verifier::authors_match;
use veritas_registry::{CachedRegistry, RegistryVerifier};

/// Log writer that keeps everything in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn smith_2020() -> StaticRegistry {
    StaticRegistry::new().with_record(record(
        "12345678",
        &["Smith J", "Doe A"],
        "2020 Mar 15",
        "Statin therapy and LDL cholesterol in older adults.",
    ))
}

#[test]
fn matching_author_and_year_verifies() {
    let mut verifier = RegistryVerifier::new(smith_2020());
    assert!(verifier.verify("Smith", "2020", "12345678"));
    assert!(verifier.errors().is_empty());
}

#[test]
fn year_mismatch_reports_both_years() {
    let mut verifier = RegistryVerifier::new(smith_2020());
    assert!(!verifier.verify("Smith", "2019", "12345678"));

    let errors = verifier.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ViolationKind::YearMismatch);
    assert!(errors[0].message.contains("2019"));
    assert!(errors[0].message.contains("2020"));
    assert!(errors[0].message.contains("Title: Statin therapy"));
}

#[test]
fn author_mismatch_is_checked_before_year() {
    let mut verifier = RegistryVerifier::new(smith_2020());
    assert!(!verifier.verify("Jones", "2019", "12345678"));
    assert_eq!(verifier.errors()[0].kind, ViolationKind::AuthorMismatch);
    assert!(verifier.errors()[0].message.contains("Actual: Smith et al., 2020"));
}

#[test]
fn author_match_is_case_insensitive_substring_both_ways() {
    assert!(authors_match("smith", "Smith"));
    assert!(authors_match("Li", "Lin"));
    assert!(authors_match("Lindqvist", "Lind"));
    assert!(!authors_match("Smith", "Jones"));
}

#[test]
fn unknown_identifier_is_not_found() {
    let mut verifier = RegistryVerifier::new(smith_2020());
    assert!(!verifier.verify("Smith", "2020", "99999999"));
    assert_eq!(verifier.errors()[0].kind, ViolationKind::IdentifierNotFound);
    assert!(verifier.errors()[0].message.contains("not found in static"));
}

#[test]
fn unknown_identifier_is_logged() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();

    let mut verifier = RegistryVerifier::new(smith_2020());
    tracing::subscriber::with_default(subscriber, || {
        assert!(!verifier.verify("Smith", "2020", "99999999"));
    });

    let output = logs.contents();
    assert!(output.contains("registry_not_found"), "got: {output}");
    assert!(output.contains("99999999"), "got: {output}");
}

#[test]
fn lookup_failure_becomes_not_found() {
    let mut verifier = RegistryVerifier::new(smith_2020().failing("12345678"));
    assert!(!verifier.verify("Smith", "2020", "12345678"));
    assert_eq!(verifier.errors()[0].kind, ViolationKind::IdentifierNotFound);
    assert!(verifier.errors()[0].message.contains("connection refused"));
}

#[test]
fn record_without_authors_fails() {
    let registry = StaticRegistry::new()
        .with_record(record("11111111", &[], "2020", "Anonymous"))
        .with_record(record("22222222", &[""], "2020", "Blank author"));
    let mut verifier = RegistryVerifier::new(registry);

    assert!(!verifier.verify("Smith", "2020", "11111111"));
    assert!(!verifier.verify("Smith", "2020", "22222222"));
    assert!(verifier
        .errors()
        .iter()
        .all(|e| e.message.ends_with("No authors found")));
}

#[test]
fn verify_text_checks_each_citation_once() {
    let registry = smith_2020().with_record(record("87654321", &["Jones K"], "2018", "Other"));
    let mut verifier = RegistryVerifier::new(registry);

    let report = verifier.verify_text(&documents::cited_review(), Some("review.md"));

    assert_eq!(report.checks.len(), 2);
    assert!(report.checks[0].verified);
    assert!(!report.checks[1].verified);
    let mismatch = report.checks[1].mismatch.as_ref().unwrap();
    assert_eq!(mismatch.cited_year, "2019");
    assert_eq!(mismatch.actual_year, "2018");
    assert!(!report.passed());
    assert_eq!(report.failures().count(), 1);
    assert_eq!(report.errors().len(), 1);
    assert_eq!(verifier.registry().calls(), vec!["12345678", "87654321"]);
}

#[test]
fn one_failure_does_not_stop_the_rest() {
    let registry = smith_2020().failing("11111111");
    let mut verifier = RegistryVerifier::new(registry);
    let text = "(Doe, 2021, PMID: 11111111) then (Smith et al., 2020, PMID: 12345678)";

    let report = verifier.verify_text(text, None);
    let verified: Vec<bool> = report.checks.iter().map(|c| c.verified).collect();
    assert_eq!(verified, vec![false, true]);
}

#[test]
fn text_without_citations_passes_vacuously() {
    let mut verifier = RegistryVerifier::new(StaticRegistry::new());
    let report = verifier.verify_text("No references here.", None);
    assert!(report.checks.is_empty());
    assert!(report.passed());
}

#[test]
fn cache_serves_repeat_lookups() {
    let cached = CachedRegistry::new(smith_2020(), 16);
    let mut verifier = RegistryVerifier::new(cached);

    assert!(verifier.verify("Smith", "2020", "12345678"));
    assert!(!verifier.verify("Smith", "2019", "12345678"));
    assert!(!verifier.verify("Smith", "2020", "99999999"));
    assert!(!verifier.verify("Smith", "2020", "99999999"));

    assert_eq!(verifier.registry().inner().calls(), vec!["12345678", "99999999"]);
}

#[test]
fn cache_does_not_keep_failures() {
    let cached = CachedRegistry::new(smith_2020().failing("12345678"), 16);
    let mut verifier = RegistryVerifier::new(cached);

    verifier.verify("Smith", "2020", "12345678");
    verifier.verify("Smith", "2020", "12345678");
    assert_eq!(verifier.registry().inner().calls().len(), 2);
    assert_eq!(verifier.take_errors().len(), 2);
    assert!(verifier.errors().is_empty());
}
