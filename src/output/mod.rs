//! Tree output
//!
//! - `console` - colored console output
//! - `json` - JSON output
//! - `file` - plain-text output file

mod config;
mod console;
mod file;
mod json;

pub use config::OutputConfig;
pub use console::{ConsoleFormatter, write_lines};
pub use file::{render_plain, write_output_file};
pub use json::{print_json, to_json};
