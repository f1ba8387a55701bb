//! Command-line arguments.

use std::path::PathBuf;

use ansible_pp_render::{Eol, Measure};
use clap::Parser;

/// Pretty-print the output of `ansible-playbook --list-tasks`.
#[derive(Debug, Default, Parser)]
#[command(
    name = "ansible-pp",
    version,
    about = "Pretty-print the output of ansible-playbook --list-tasks",
    after_help = "Example:\n  ansible-playbook site.yml --list-tasks | ansible-pp --stdin --table"
)]
pub struct Cli {
    /// Listing to read
    pub file: Option<PathBuf>,

    /// Read standard input (takes precedence over FILE)
    #[arg(long)]
    pub stdin: bool,

    /// Chop long lines to the line width
    #[arg(long)]
    pub chop: bool,

    /// Indent tasks by block/role
    #[arg(long)]
    pub indent: bool,

    /// Table output
    #[arg(long)]
    pub table: bool,

    /// DOS box-drawing characters
    #[arg(long)]
    pub dos: bool,

    /// Calculate string width as monospace width (same as --measure monospace)
    #[arg(long, conflicts_with = "measure")]
    pub mono: bool,

    /// How string width is calculated: bytes, chars or monospace [default: chars]
    #[arg(long, value_name = "MEASURE")]
    pub measure: Option<Measure>,

    /// Custom line width (disables terminal detection)
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,

    /// Print width statistics before the report
    #[arg(long)]
    pub stats: bool,

    /// Line ending: lf or crlf
    #[arg(long, value_name = "EOL", default_value_t = Eol::Lf)]
    pub eol: Eol,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
