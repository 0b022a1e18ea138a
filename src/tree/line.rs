//! Display lines produced by the walker

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Root,
    Dir,
    File,
}

/// One entry of the tree. Root sits at depth 0, its children at depth 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    pub depth: usize,
    pub name: String,
    pub kind: EntryKind,
}

impl TreeLine {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            depth: 0,
            name: name.into(),
            kind: EntryKind::Root,
        }
    }

    pub fn dir(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn file(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Root | EntryKind::Dir)
    }

    /// Two spaces per level.
    pub fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }

    pub fn connector(&self) -> &'static str {
        match self.kind {
            EntryKind::Root | EntryKind::Dir => "|-- ",
            EntryKind::File => "└── ",
        }
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.indent(), self.connector(), self.name)
    }
}
