mod commands;
mod terminal;

use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use commands::{CommandLine, process};
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg);

    let output: Vec<String> = if let Some(path) = &commands.file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        process::process_lines(&process::split_lines(&content), &cfg)
    } else if let Some(target) = &commands.target {
        process::process_line(target, &cfg)
    } else {
        CommandLine::print_usage()?;
        return Ok(ExitCode::FAILURE);
    };

    print::write_lines(&output).context("failed to write output")?;
    Ok(ExitCode::SUCCESS)
}
