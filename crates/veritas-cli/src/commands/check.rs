use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;
use veritas_core::config::PolicyRule;
use veritas_core::models::{Document, Verdict, VerificationReport};
use veritas_core::VeritasResult;
use veritas_observability::AuditLog;
use veritas_validation::rules::loader::RuleLoader;
use veritas_validation::{summary, RuleSet, VerificationEngine, VerificationSession};

use super::load_config;
use crate::cli::{CheckArgs, Cli};
use crate::input::{self, Input};

#[derive(Serialize)]
struct JsonOut<'a> {
    verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    audit_path: Option<PathBuf>,
    report: &'a VerificationReport,
}

pub fn run(cli: &Cli, args: &CheckArgs) -> VeritasResult<ExitCode> {
    // Read every input first so a bad path fails before anything is audited.
    let inputs: Vec<Input> = if args.stdin {
        vec![input::read(None, true)?]
    } else if args.paths.is_empty() {
        vec![input::read(None, false)?]
    } else {
        args.paths
            .iter()
            .map(|p| input::read_file(p))
            .collect::<Result<_, _>>()?
    };

    let config = load_config(cli, args.block)?;

    let mut rules = RuleSet::builtin();
    if let Some(ref path) = args.rules {
        for rule in RuleLoader::load_from_file(path)? {
            rules.push(rule);
        }
    }
    let engine = VerificationEngine::with_rules(config.policy.clone(), rules);

    let mut session = if args.no_audit {
        VerificationSession::without_audit()
    } else {
        VerificationSession::new(Box::new(AuditLog::new(config.effective_log_dir(&cli.root))))
    };

    let mut blocked = false;
    for input in inputs {
        let mut document = match args.kind {
            Some(kind) => Document::new(input.content, kind.into()),
            None => Document::inferred(input.content, input.filename.as_deref()),
        };
        if let Some(name) = input.filename {
            document = document.with_filename(name);
        }

        let outcome = engine.verify_document(&mut session, &document);
        blocked |= outcome.verdict.is_blocking();

        if args.json {
            let out = JsonOut {
                verdict: outcome.verdict,
                audit_path: outcome.audit_path,
                report: &outcome.report,
            };
            println!("{}", serde_json::to_string(&out).unwrap_or_default());
        } else {
            if session.mark_instruction_check() {
                print!("{}", policy_banner(&engine));
            }
            print!("{}", summary::render(&outcome.report, outcome.verdict));
        }
    }

    session.finish();
    Ok(if blocked { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Shown once per run before the first human-readable summary.
fn policy_banner(engine: &VerificationEngine) -> String {
    let mut out = String::from(
        "Claims need a citation: (Author et al., Year, PMID: XXXXXXXX)\nActive rules:",
    );
    for rule in PolicyRule::ALL {
        if engine.policy().is_enabled(rule) {
            out.push_str(&format!(" {}={}", rule.as_str(), engine.policy().action(rule).as_str()));
        }
    }
    out.push_str("\n\n");
    out
}
