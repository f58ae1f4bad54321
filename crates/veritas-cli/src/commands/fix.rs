use std::process::ExitCode;

use veritas_core::VeritasResult;
use veritas_validation::fixer;

use crate::cli::InputArgs;
use crate::input;

pub fn run(args: &InputArgs) -> VeritasResult<ExitCode> {
    let input = input::read(args.path.as_deref(), args.stdin)?;
    print!("{}", fixer::fix_document(&input.content));
    Ok(ExitCode::SUCCESS)
}
