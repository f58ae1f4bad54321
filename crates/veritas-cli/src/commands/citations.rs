use std::process::ExitCode;

use veritas_core::models::CitationVerificationReport;
use veritas_core::traits::{IAuditSink, IBibliographicRegistry};
use veritas_core::VeritasResult;
use veritas_observability::AuditLog;
use veritas_registry::{CachedRegistry, PubMedRegistry, RegistryVerifier};
use veritas_validation::grammar;

use super::load_config;
use crate::cli::{Cli, InputArgs};
use crate::input;

pub fn run(cli: &Cli, args: &InputArgs) -> VeritasResult<ExitCode> {
    let input = input::read(args.path.as_deref(), args.stdin)?;
    let config = load_config(cli, false)?;
    let source = input.filename.as_deref().unwrap_or("<stdin>");

    let citations = grammar::extract_citations(&input.content);
    if citations.is_empty() {
        println!("No citations found in {source}");
        return Ok(ExitCode::SUCCESS);
    }
    println!("Verifying {} citations in {source}...", citations.len());

    let pubmed = PubMedRegistry::new(&config.registry)?;
    let capacity = config.registry.effective_cache_capacity();
    let report = if capacity > 0 {
        verify(CachedRegistry::new(pubmed, capacity), &input.content, source)
    } else {
        verify(pubmed, &input.content, source)
    };

    for check in &report.checks {
        let status = if check.verified { "verified" } else { "MISMATCH" };
        let mark = if check.verified { '✓' } else { '✗' };
        println!("  {mark} {} - {status}", check.citation);
    }

    let log = AuditLog::new(config.effective_log_dir(&cli.root));
    if let Err(e) = log.record_citation_run(&report) {
        eprintln!("Warning: {e}");
    }

    if report.passed() {
        println!("\n✓ All citations verified successfully");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("\nVERIFICATION FAILED");
        println!("Errors found:");
        for error in report.errors() {
            println!("  {}", error.message);
        }
        Ok(ExitCode::FAILURE)
    }
}

fn verify<R: IBibliographicRegistry>(
    registry: R,
    text: &str,
    source: &str,
) -> CitationVerificationReport {
    RegistryVerifier::new(registry).verify_text(text, Some(source))
}
