use std::io::{self, BufWriter, Write};

/// Writes the generated lines to stdout. Diagnostics never go here.
pub fn write_lines(lines: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
