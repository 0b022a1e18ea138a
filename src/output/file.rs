//! Plain-text output file

use std::fs;
use std::io;
use std::path::Path;

use crate::tree::TreeLine;

/// One rendered line per entry, each terminated by `\n`.
pub fn render_plain(lines: &[TreeLine]) -> String {
    let mut text = String::new();
    for line in lines {
        text.push_str(&line.to_string());
        text.push('\n');
    }
    text
}

/// Write the plain tree to `path` as UTF-8, replacing any existing file.
pub fn write_output_file(path: &Path, lines: &[TreeLine]) -> io::Result<()> {
    fs::write(path, render_plain(lines))
}
