//! Choosing between several matching projects

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Picks one of several options, returning its 0-based index.
pub trait Selector {
    fn select(&mut self, options: &[String]) -> io::Result<usize>;
}

/// Numbered-list prompt over any line reader and writer.
///
/// Invalid answers re-prompt forever; only end of input stops the loop.
pub struct TerminalSelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalSelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl TerminalSelector<StdinLock<'static>, Stdout> {
    /// Prompt on stdout and read answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Selector for TerminalSelector<R, W> {
    fn select(&mut self, options: &[String]) -> io::Result<usize> {
        if options.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "nothing to choose from",
            ));
        }

        writeln!(self.output, "Multiple matches found:")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, option)?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "Choose a number: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a valid choice was made",
                ));
            }

            if let Some(index) = parse_choice(&line, options.len()) {
                return Ok(index);
            }
            writeln!(self.output, "Invalid choice. Please enter a valid number.")?;
        }
    }
}

/// Parse a 1-based answer into a 0-based index. Only plain digits in
/// `1..=count` are accepted; signs, spaces inside the number and zero are not.
pub fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    let answer = answer.trim();
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let choice: usize = answer.parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}
