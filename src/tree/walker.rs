//! TreeWalker - stack-based traversal producing ordered display lines

use std::path::{Path, PathBuf};

use super::config::WalkerConfig;
use super::filter::ExclusionFilter;
use super::line::TreeLine;

/// Pending work on the traversal stack.
enum Frame {
    Dir { path: PathBuf, depth: usize },
    Files { names: Vec<String>, depth: usize },
}

/// Sorted, already-filtered contents of one directory.
#[derive(Default)]
struct Listing {
    dirs: Vec<String>,
    files: Vec<String>,
}

/// Walks a directory top-down and emits one [`TreeLine`] per listed entry.
///
/// Within a directory the order is: the directory's own line, each
/// subdirectory subtree in name order, then the directory's files in name
/// order.
pub struct TreeWalker {
    config: WalkerConfig,
    filter: ExclusionFilter,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let filter = ExclusionFilter::new(&config);
        Self { config, filter }
    }

    pub fn walk(&self, root: &Path) -> Vec<TreeLine> {
        let mut lines = vec![TreeLine::root(display_name(root))];
        let mut stack = vec![Frame::Dir {
            path: root.to_path_buf(),
            depth: 0,
        }];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Files { names, depth } => {
                    lines.extend(names.into_iter().map(|name| TreeLine::file(depth, name)));
                }
                Frame::Dir { path, depth } => {
                    // Unreadable directories vanish, including their own line
                    let Some(listing) = self.read_listing(&path) else {
                        continue;
                    };

                    if depth > 0 {
                        lines.push(TreeLine::dir(depth, display_name(&path)));
                    }

                    // Pushed first so the files come out after every subtree
                    let file_depth = depth + 1;
                    if self.config.lists_files_at(file_depth) && !listing.files.is_empty() {
                        stack.push(Frame::Files {
                            names: listing.files,
                            depth: file_depth,
                        });
                    }

                    if !self.config.at_max_depth(depth) {
                        for name in listing.dirs.into_iter().rev() {
                            stack.push(Frame::Dir {
                                path: path.join(name),
                                depth: depth + 1,
                            });
                        }
                    }
                }
            }
        }

        lines
    }

    /// Read one directory, dropping excluded names and sorting what is left.
    ///
    /// Symlinks to directories are skipped entirely; any other symlink,
    /// broken ones included, is listed as a file.
    fn read_listing(&self, path: &Path) -> Option<Listing> {
        let entries = std::fs::read_dir(path).ok()?;

        let mut listing = Listing::default();
        for entry in entries.filter_map(|e| e.ok()) {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let name = entry.file_name().to_string_lossy().to_string();

            if file_type.is_dir() {
                if !self.filter.is_excluded_dir(&name) {
                    listing.dirs.push(name);
                }
            } else if file_type.is_symlink() && entry.path().is_dir() {
                continue;
            } else if !self.filter.is_excluded_file(&name) {
                listing.files.push(name);
            }
        }

        listing.dirs.sort();
        listing.files.sort();
        Some(listing)
    }
}

/// Last path component, or the whole path when there is none (e.g. `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
