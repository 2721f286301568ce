//! # Line Processing
//!
//! Applies the expansion to a block or allow list, line by line. Lines whose
//! first token is a CIDR or a range are replaced by a comment carrying the
//! original line, followed by the generated patterns. Everything else is
//! echoed as is.

use iprefix_common::config::Config;
use iprefix_common::network::target::Target;
use rayon::prelude::*;
use tracing::{debug, error, error_span};

/// Output lines for a single input line.
pub fn process_line(line: &str, cfg: &Config) -> Vec<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(cfg.comment.as_str()) {
        return vec![line.to_string()];
    }

    let normalized = trimmed.replacen('\t', " ", 1);
    let token = normalized
        .split_once(' ')
        .map_or(normalized.as_str(), |(head, _)| head)
        .trim();

    let span = error_span!("line", token = %token);
    let _guard = span.enter();

    match Target::parse(token) {
        Ok(Some(target)) => {
            let patterns = iprefix_core::resolve(&target);
            debug!(%target, count = patterns.len(), "resolved line");

            let mut out = Vec::with_capacity(patterns.len() + 1);
            out.push(format!("{} {}", cfg.comment, normalized));
            out.extend(patterns);
            out
        }
        Ok(None) => vec![line.to_string()],
        Err(e) => {
            error!("{e}");
            vec![line.to_string()]
        }
    }
}

/// Processes lines on the rayon pool. Output keeps input order.
pub fn process_lines(lines: &[&str], cfg: &Config) -> Vec<String> {
    let per_line: Vec<Vec<String>> = lines
        .par_iter()
        .map(|line| process_line(line, cfg))
        .collect();

    per_line.into_iter().flatten().collect()
}

/// Splits file content into trimmed lines after dropping one trailing line
/// ending (`\n`, `\r\n` or `\r`).
pub fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }

    let body = match content.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => content.strip_suffix('\r').unwrap_or(content),
    };

    body.split('\n').map(str::trim).collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
