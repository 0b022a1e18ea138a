//! Configuration types for the tree walker

/// Directory names that are never listed or descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".next",
    ".turbo",
    ".vercel",
    "dist",
    "build",
    "coverage",
    ".cache",
    ".parcel-cache",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".vscode",
    ".idea",
    ".DS_Store",
    "out",
];

/// File name globs for build output, binaries, media and lock files.
pub const DEFAULT_EXCLUDED_FILE_GLOBS: &[&str] = &[
    "*.log", "*.lock", "*.min.*", "*.map", "*.pyc", "*.png", "*.jpg", "*.jpeg", "*.gif", "*.webp",
    "*.svg", "*.ico", "*.pdf", "*.zip", "*.tar", "*.gz", "*.7z", "*.exe", "*.dll", "*.so",
    "*.dylib",
];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Deepest directory level whose children are listed. `None` = unlimited.
    pub max_depth: Option<usize>,
    pub include_files: bool,
    pub excluded_dirs: Vec<String>,
    pub excluded_file_globs: Vec<String>,
}

impl WalkerConfig {
    /// Config with no exclusions at all.
    pub fn unfiltered() -> Self {
        Self {
            excluded_dirs: Vec::new(),
            excluded_file_globs: Vec::new(),
            ..Default::default()
        }
    }

    /// A directory at `depth` keeps its subdirectories out of the walk.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }

    /// Whether files at `file_depth` are listed at all.
    pub fn lists_files_at(&self, file_depth: usize) -> bool {
        self.include_files && self.max_depth.is_none_or(|max| file_depth <= max)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            include_files: true,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            excluded_file_globs: DEFAULT_EXCLUDED_FILE_GLOBS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
