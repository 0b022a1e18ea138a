//! Pathtree - find a project by path or fuzzy name and print its pruned tree

pub mod output;
pub mod resolve;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use output::{ConsoleFormatter, OutputConfig, print_json, render_plain, write_output_file};
pub use resolve::{ResolveError, Selector, TerminalSelector, normalize, resolve_root};
pub use tree::{EntryKind, TreeLine, TreeWalker, WalkerConfig};
