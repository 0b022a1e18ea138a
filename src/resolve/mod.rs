//! Turning a path or a loose project name into a directory
//!
//! A query that names an existing path is used as-is. Anything else is
//! matched against the subdirectories of a base directory by normalized
//! name, in three tiers (exact, prefix, substring). Several matches are
//! handed to a [`Selector`].

mod candidates;
mod normalize;
mod selector;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use candidates::{Candidate, MatchTier, list_subdirectories, rank_candidates};
pub use normalize::{absolutize, clean_query, normalize};
pub use selector::{Selector, TerminalSelector, parse_choice};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("Base directory not found: {}", .0.display())]
    BaseDirNotFound(PathBuf),

    #[error("Error reading base directory: {source}")]
    ReadBaseDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Empty project name after normalization.")]
    EmptyQuery,

    #[error("No matching project folders under:\n  {}\nQuery: {query}", base_dir.display())]
    NoMatch { base_dir: PathBuf, query: String },

    #[error("no project selected: {0}")]
    Selection(#[source] io::Error),
}

/// Resolve `query` to an absolute path.
///
/// A missing or blank query means the current directory. The returned path
/// exists but is not guaranteed to be a directory when the query was a
/// direct path.
pub fn resolve_root<S: Selector + ?Sized>(
    query: Option<&str>,
    base_dir: &Path,
    selector: &mut S,
) -> Result<PathBuf, ResolveError> {
    let query = match clean_query(query.unwrap_or_default()) {
        "" => ".",
        q => q,
    };

    let direct = Path::new(query);
    if direct.exists() {
        return absolutize(direct).map_err(ResolveError::CurrentDir);
    }

    let base_dir = absolutize(base_dir).map_err(ResolveError::CurrentDir)?;
    if !base_dir.is_dir() {
        return Err(ResolveError::BaseDirNotFound(base_dir));
    }

    let entries = list_subdirectories(&base_dir).map_err(|source| ResolveError::ReadBaseDir {
        path: base_dir.clone(),
        source,
    })?;

    let normalized_query = normalize(query);
    if normalized_query.is_empty() {
        return Err(ResolveError::EmptyQuery);
    }

    let candidates = rank_candidates(&entries, &normalized_query);
    match candidates.as_slice() {
        [] => Err(ResolveError::NoMatch {
            base_dir,
            query: query.to_string(),
        }),
        [only] => Ok(only.path.clone()),
        _ => {
            let names: Vec<String> = candidates.iter().map(|c| c.name.clone()).collect();
            let index = selector.select(&names).map_err(ResolveError::Selection)?;
            candidates.get(index).map(|c| c.path.clone()).ok_or_else(|| {
                ResolveError::Selection(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("choice {} is out of range", index + 1),
                ))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Records the options it was offered and answers with a fixed index.
    struct Recording {
        answer: usize,
        offered: Vec<String>,
    }

    impl Recording {
        fn answering(answer: usize) -> Self {
            Self {
                answer,
                offered: Vec::new(),
            }
        }
    }

    impl Selector for Recording {
        fn select(&mut self, options: &[String]) -> io::Result<usize> {
            self.offered = options.to_vec();
            Ok(self.answer)
        }
    }

    fn base_with(dirs: &[&str]) -> TempDir {
        let base = TempDir::new().unwrap();
        for d in dirs {
            fs::create_dir_all(base.path().join(d)).unwrap();
        }
        base
    }

    #[test]
    fn test_existing_path_bypasses_fuzzy_search() {
        let base = base_with(&["Foo", "FooBar"]);
        let elsewhere = TempDir::new().unwrap();
        let target = elsewhere.path().join("foo");
        fs::create_dir(&target).unwrap();

        let mut selector = Recording::answering(0);
        let query = target.to_string_lossy().to_string();
        let resolved = resolve_root(Some(&query), base.path(), &mut selector).unwrap();

        assert_eq!(resolved, target);
        assert!(selector.offered.is_empty(), "selector must not be consulted");
    }

    #[test]
    fn test_quoted_path_is_accepted() {
        let dir = TempDir::new().unwrap();
        let query = format!("  \"{}\"  ", dir.path().display());
        let resolved = resolve_root(Some(&query), Path::new("/nonexistent"), &mut Recording::answering(0)).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn test_blank_query_means_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        let mut selector = Recording::answering(0);
        assert_eq!(resolve_root(None, Path::new("/nonexistent"), &mut selector).unwrap(), cwd);
        assert_eq!(resolve_root(Some("   "), Path::new("/nonexistent"), &mut selector).unwrap(), cwd);
    }

    #[test]
    fn test_single_match_returned_without_prompt() {
        let base = base_with(&["my-project", "other"]);
        let mut selector = Recording::answering(0);
        let resolved = resolve_root(Some("My Project"), base.path(), &mut selector).unwrap();
        assert_eq!(resolved, base.path().join("my-project"));
        assert!(selector.offered.is_empty());
    }

    #[test]
    fn test_multiple_matches_offered_in_tier_order() {
        let base = base_with(&["BarFoo", "Foo", "FooBar", "Unrelated"]);
        let mut selector = Recording::answering(2);
        let resolved = resolve_root(Some("foo"), base.path(), &mut selector).unwrap();
        assert_eq!(selector.offered, vec!["Foo", "FooBar", "BarFoo"]);
        assert_eq!(resolved, base.path().join("BarFoo"));
    }

    #[test]
    fn test_missing_base_dir() {
        let base = TempDir::new().unwrap();
        let missing = base.path().join("gone");
        let err = resolve_root(Some("zzz-no-such-project"), &missing, &mut Recording::answering(0)).unwrap_err();
        assert!(matches!(err, ResolveError::BaseDirNotFound(ref p) if *p == missing));
        assert!(err.to_string().starts_with("Base directory not found:"));
    }

    #[test]
    fn test_read_base_dir_message() {
        let err = ResolveError::ReadBaseDir {
            path: PathBuf::from("/base"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        assert_eq!(err.to_string(), "Error reading base directory: Permission denied");
    }

    #[test]
    fn test_query_without_alphanumerics() {
        let base = base_with(&["alpha"]);
        let err = resolve_root(Some("--__--"), base.path(), &mut Recording::answering(0)).unwrap_err();
        assert!(matches!(err, ResolveError::EmptyQuery));
    }

    #[test]
    fn test_no_match_mentions_base_and_query() {
        let base = base_with(&["alpha", "beta"]);
        let err = resolve_root(Some("gamma"), base.path(), &mut Recording::answering(0)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(&base.path().display().to_string()));
        assert!(message.contains("Query: gamma"));
    }

    #[test]
    fn test_out_of_range_selection_is_an_error() {
        let base = base_with(&["app-one", "app-two"]);
        let err = resolve_root(Some("app"), base.path(), &mut Recording::answering(7)).unwrap_err();
        assert!(matches!(err, ResolveError::Selection(_)));
    }

    #[test]
    fn test_files_in_base_are_not_candidates() {
        let base = base_with(&["notes-dir"]);
        fs::write(base.path().join("notes.txt"), "x").unwrap();
        let resolved = resolve_root(Some("notes"), base.path(), &mut Recording::answering(0)).unwrap();
        assert_eq!(resolved, base.path().join("notes-dir"));
    }
}
