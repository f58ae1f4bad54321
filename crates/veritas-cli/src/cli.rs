use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use veritas_core::models::ContentKind;

#[derive(Parser, Debug)]
#[command(name = "veritas", version, about = "Citation and formatting verification for research notes")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Project root holding veritas.toml and .veritas/"
    )]
    pub root: PathBuf,
    #[arg(long, global = true, help = "Configuration file (JSON or TOML) layered over project files")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Audit log directory")]
    pub log_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify documents against the citation and formatting policy.
    Check(CheckArgs),
    /// Check every extracted citation against the bibliographic registry.
    Citations(InputArgs),
    /// Print the document with mechanical formatting fixes applied.
    Fix(InputArgs),
    /// Delete audit files older than the retention period.
    PruneLogs {
        #[arg(
            long,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Retention in days (default: config, then 5)"
        )]
        days: Option<u32>,
    },
}

#[derive(Args, Debug)]
pub struct InputArgs {
    pub path: Option<PathBuf>,
    #[arg(long, conflicts_with = "path", help = "Read the document from stdin")]
    pub stdin: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    pub paths: Vec<PathBuf>,
    #[arg(long, conflicts_with = "paths", help = "Read the document from stdin")]
    pub stdin: bool,
    #[arg(long, value_enum, help = "Content kind (default: inferred)")]
    pub kind: Option<KindArg>,
    #[arg(long, default_value_t = false, help = "Block on missing citations")]
    pub block: bool,
    #[arg(long, help = "Extra TOML rule definitions")]
    pub rules: Option<PathBuf>,
    #[arg(long, default_value_t = false, help = "Do not write audit records")]
    pub no_audit: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    Markdown,
    Text,
}

impl From<KindArg> for ContentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Markdown => ContentKind::Markdown,
            KindArg::Text => ContentKind::Text,
        }
    }
}
