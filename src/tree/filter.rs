//! Name-based exclusion for tree walking

use std::collections::HashSet;

use glob::Pattern;

use super::config::WalkerConfig;

/// Compiled exclusion rules: exact directory names and file name globs.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    dirs: HashSet<String>,
    file_patterns: Vec<Pattern>,
}

impl ExclusionFilter {
    /// Build the filter from a walker config. Globs that fail to compile
    /// never match.
    pub fn new(config: &WalkerConfig) -> Self {
        Self {
            dirs: config.excluded_dirs.iter().cloned().collect(),
            file_patterns: config
                .excluded_file_globs
                .iter()
                .filter_map(|p| Pattern::new(p).ok())
                .collect(),
        }
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.file_patterns.iter().any(|p| p.matches(name))
    }
}
