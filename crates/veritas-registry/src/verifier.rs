//! Citation-vs-record verification.

use veritas_core::models::{
    Citation, CitationCheck, CitationVerificationReport, RegistryMismatch, Violation,
    ViolationKind,
};
use veritas_core::traits::IBibliographicRegistry;
use veritas_observability::tracing_setup::events;
use veritas_validation::grammar;

/// Verifies citations one at a time against a registry.
///
/// Errors accumulate in [`errors`](Self::errors) across calls; nothing a
/// lookup does is ever returned as `Err`.
pub struct RegistryVerifier<R> {
    registry: R,
    errors: Vec<Violation>,
}

/// Outcome of one lookup before it is recorded.
struct Finding {
    violation: Option<Violation>,
    mismatch: Option<RegistryMismatch>,
}

impl Finding {
    fn verified() -> Self {
        Self {
            violation: None,
            mismatch: None,
        }
    }

    fn failed(violation: Violation) -> Self {
        Self {
            violation: Some(violation),
            mismatch: None,
        }
    }
}

impl<R: IBibliographicRegistry> RegistryVerifier<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            errors: Vec::new(),
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Errors recorded so far, oldest first.
    pub fn errors(&self) -> &[Violation] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<Violation> {
        std::mem::take(&mut self.errors)
    }

    /// Check one (author, year, identifier) triple. Returns true when the
    /// registry record matches; otherwise records one error and returns false.
    pub fn verify(&mut self, author: &str, year: &str, identifier: &str) -> bool {
        let finding = self.evaluate(author.trim(), year.trim(), identifier.trim());
        match finding.violation {
            Some(violation) => {
                self.errors.push(violation);
                false
            }
            None => true,
        }
    }

    /// Check one extracted citation.
    pub fn check(&mut self, citation: &Citation) -> CitationCheck {
        let finding = self.evaluate(citation.author(), citation.year(), citation.identifier());
        if let Some(ref violation) = finding.violation {
            self.errors.push(violation.clone());
        }
        CitationCheck {
            citation: citation.clone(),
            verified: finding.violation.is_none(),
            violation: finding.violation,
            mismatch: finding.mismatch,
        }
    }

    /// Extract every citation from `text` and check each in turn. One
    /// failing citation never stops the rest.
    pub fn verify_text(&mut self, text: &str, source: Option<&str>) -> CitationVerificationReport {
        let checks = grammar::extract_citations(text)
            .iter()
            .map(|citation| self.check(citation))
            .collect();
        CitationVerificationReport::new(source.map(str::to_string), checks)
    }

    fn evaluate(&self, author: &str, year: &str, identifier: &str) -> Finding {
        let cited = format!("{author} et al., {year}, PMID: {identifier}");

        let record = match self.registry.fetch(identifier) {
            Ok(Some(record)) => record,
            Ok(None) => {
                events::registry_not_found(self.registry.name(), identifier);
                return Finding::failed(Violation::error(
                    ViolationKind::IdentifierNotFound,
                    None,
                    cited,
                    format!("PMID {identifier} not found in {}", self.registry.name()),
                ));
            }
            Err(e) => {
                events::registry_failure(self.registry.name(), identifier, &e.to_string());
                return Finding::failed(Violation::error(
                    ViolationKind::IdentifierNotFound,
                    None,
                    cited,
                    format!("Failed to fetch PMID {identifier}: {e}"),
                ));
            }
        };

        let Some(first_author) = record.first_author_surname() else {
            return Finding::failed(Violation::error(
                ViolationKind::AuthorMismatch,
                None,
                cited,
                format!("PMID {identifier}: No authors found"),
            ));
        };
        let pub_year = record.publication_year();

        let kind = if !authors_match(author, first_author) {
            ViolationKind::AuthorMismatch
        } else if year != pub_year {
            ViolationKind::YearMismatch
        } else {
            return Finding::verified();
        };

        let mismatch = RegistryMismatch {
            cited_author: author.to_string(),
            cited_year: year.to_string(),
            actual_author: first_author.to_string(),
            actual_year: pub_year.to_string(),
            title: record.title.clone(),
        };
        events::citation_mismatch(
            identifier,
            kind.as_str(),
            &format!("{author} {year}"),
            &format!("{first_author} {pub_year}"),
        );

        Finding {
            violation: Some(Violation::error(
                kind,
                None,
                cited,
                mismatch_message(identifier, kind, &mismatch),
            )),
            mismatch: Some(mismatch),
        }
    }
}

/// Case-insensitive substring match in either direction.
pub fn authors_match(cited: &str, actual: &str) -> bool {
    let cited = cited.trim().to_lowercase();
    let actual = actual.to_lowercase();
    cited.contains(&actual) || actual.contains(&cited)
}

fn mismatch_message(identifier: &str, kind: ViolationKind, m: &RegistryMismatch) -> String {
    let what = match kind {
        ViolationKind::YearMismatch => "Year mismatch",
        _ => "Author mismatch",
    };
    format!(
        "PMID {identifier}: {what}\n  Cited: {} et al., {}\n  Actual: {} et al., {}\n  Title: {}",
        m.cited_author, m.cited_year, m.actual_author, m.actual_year, m.title
    )
}

