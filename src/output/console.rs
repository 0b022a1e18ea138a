//! Console output formatter
//!
//! Writes each tree line to stdout, coloring directory names when color is
//! enabled.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::TreeLine;

use super::config::OutputConfig;

pub struct ConsoleFormatter {
    stdout: StandardStream,
}

impl ConsoleFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    pub fn print(&mut self, lines: &[TreeLine]) -> io::Result<()> {
        write_lines(&mut self.stdout, lines)
    }
}

/// Write lines to any color-capable writer. Directory and root names are
/// bold blue, file names use the default color.
pub fn write_lines<W: WriteColor>(out: &mut W, lines: &[TreeLine]) -> io::Result<()> {
    for line in lines {
        write!(out, "{}{}", line.indent(), line.connector())?;
        if line.is_dir() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(out, "{}", line.name)?;
            out.reset()?;
        } else {
            write!(out, "{}", line.name)?;
        }
        writeln!(out)?;
    }
    out.flush()
}
