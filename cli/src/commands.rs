pub mod process;

use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};
use iprefix_common::config::Config;

#[derive(Parser, Debug)]
#[command(name = "iprefix")]
#[command(version)]
#[command(about = "Expand CIDR blocks or IP ranges to wildcard prefix patterns.")]
pub struct CommandLine {
    /// Comment marker; resolved lines are echoed behind it
    #[arg(short = 'c', long = "comment", default_value = "#")]
    pub comment: String,
    /// Read targets from a file, one per line
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,
    /// More log output (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
    /// Less log output; -qq silences diagnostics
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
    /// Disable coloured diagnostics
    #[arg(long = "no-color")]
    pub no_color: bool,
    /// A CIDR block (10.0.0.0/8) or an address range (10.0.0.1-10.0.0.9)
    pub target: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn print_usage() -> std::io::Result<()> {
        Self::command().print_help()
    }

    pub fn config(&self) -> Config {
        Config {
            comment: self.comment.clone(),
            verbose: self.verbose,
            quiet: self.quiet,
            no_color: self.no_color,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
