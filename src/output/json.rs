//! JSON output formatting

use std::io::{self, Write};

use crate::tree::TreeLine;

/// Serialize lines as a pretty-printed JSON array.
pub fn to_json(lines: &[TreeLine]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(lines)
}

/// Print lines as pretty-printed JSON to stdout.
pub fn print_json(lines: &[TreeLine]) -> io::Result<()> {
    let json = to_json(lines).map_err(io::Error::other)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}
