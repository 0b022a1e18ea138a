//! Query cleanup and name normalization for fuzzy matching

use std::io;
use std::path::{Component, Path, PathBuf};

/// Lowercase a name and drop everything that is not an ASCII letter or digit.
///
/// Separators, spaces and punctuation all disappear, so `My-Project`,
/// `my project` and `MYPROJECT` normalize to the same string.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Trim whitespace and any surrounding double or single quotes.
pub fn clean_query(raw: &str) -> &str {
    raw.trim().trim_matches('"').trim_matches('\'')
}

/// Make a path absolute against the current directory and fold away
/// `.` and `..` components without touching the filesystem.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ignores_case_and_separators() {
        assert_eq!(normalize("My-Project"), "myproject");
        assert_eq!(normalize("my project"), "myproject");
        assert_eq!(normalize("MYPROJECT"), "myproject");
        assert_eq!(normalize("my_project.v2"), "myprojectv2");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in ["Hello World", "__init__", "Réseau-App", "a1-b2_c3", ""] {
            let once = normalize(name);
            assert_eq!(normalize(&once), once, "normalize({:?}) not idempotent", name);
        }
    }

    #[test]
    fn test_normalize_drops_non_ascii() {
        assert_eq!(normalize("Réseau"), "rseau");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn test_clean_query_strips_quotes_and_whitespace() {
        assert_eq!(clean_query("  \"my app\"  "), "my app");
        assert_eq!(clean_query("'quoted'"), "quoted");
        assert_eq!(clean_query("\"'both'\""), "both");
        assert_eq!(clean_query("   "), "");
    }

    #[test]
    fn test_absolutize_folds_dot_components() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolutize(Path::new(".")).unwrap(), cwd);
        assert_eq!(absolutize(Path::new("a/./b/../c")).unwrap(), cwd.join("a").join("c"));
    }

    #[test]
    #[cfg(unix)]
    fn test_absolutize_keeps_absolute_paths() {
        assert_eq!(absolutize(Path::new("/tmp/x/../y")).unwrap(), PathBuf::from("/tmp/y"));
        assert_eq!(absolutize(Path::new("/..")).unwrap(), PathBuf::from("/"));
    }
}
