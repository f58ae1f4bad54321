pub mod check;
pub mod citations;
pub mod fix;
pub mod prune;

use veritas_core::config::{CliOverrides, ViolationAction};
use veritas_core::{VeritasConfig, VeritasResult};

use crate::cli::Cli;

/// Resolve configuration for this invocation.
pub fn load_config(cli: &Cli, block: bool) -> VeritasResult<VeritasConfig> {
    let overrides = CliOverrides {
        config_path: cli.config.clone(),
        on_violation: block.then_some(ViolationAction::Block),
        log_dir: cli.log_dir.clone(),
    };
    Ok(VeritasConfig::load(&cli.root, Some(&overrides))?)
}
