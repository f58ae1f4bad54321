use std::process::ExitCode;

use chrono::Utc;
use veritas_core::VeritasResult;
use veritas_observability::AuditLog;

use super::load_config;
use crate::cli::Cli;

pub fn run(cli: &Cli, days: Option<u32>) -> VeritasResult<ExitCode> {
    let config = load_config(cli, false)?;
    let days = days.unwrap_or_else(|| config.effective_retention_days());
    let log = AuditLog::new(config.effective_log_dir(&cli.root));

    let summary = log.prune(days, Utc::now())?;
    println!(
        "Removed {} audit file(s) older than {days} day(s); {} kept",
        summary.removed.len(),
        summary.kept
    );
    Ok(ExitCode::SUCCESS)
}
