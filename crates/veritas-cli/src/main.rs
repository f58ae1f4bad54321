use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use veritas_core::errors::VeritasErrorCode;

mod cli;
mod commands;
mod input;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    veritas_observability::tracing_setup::init_tracing();

    let result = match &cli.command {
        Commands::Check(args) => commands::check::run(&cli, args),
        Commands::Citations(args) => commands::citations::run(&cli, args),
        Commands::Fix(args) => commands::fix::run(args),
        Commands::PruneLogs { days } => commands::prune::run(&cli, *days),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
