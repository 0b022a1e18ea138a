//! Directory tree walking logic
//!
//! `TreeWalker` walks a root directory with an explicit stack, prunes
//! excluded directories before descending, honors an optional depth cap and
//! returns the tree as an ordered list of `TreeLine`s.

mod config;
mod filter;
mod line;
mod walker;

pub use config::{DEFAULT_EXCLUDED_DIRS, DEFAULT_EXCLUDED_FILE_GLOBS, WalkerConfig};
pub use filter::ExclusionFilter;
pub use line::{EntryKind, TreeLine};
pub use walker::{TreeWalker, display_name};
