//! Candidate project directories and tiered fuzzy ranking

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use super::normalize::normalize;

/// How closely a candidate's normalized name matches the normalized query.
/// Variants are ordered from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
}

/// An immediate subdirectory of the base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub normalized: String,
    pub path: PathBuf,
}

impl Candidate {
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        let name = name.into();
        Self {
            normalized: normalize(&name),
            name,
            path,
        }
    }

    /// Best tier this candidate reaches for `normalized_query`, if any.
    pub fn tier(&self, normalized_query: &str) -> Option<MatchTier> {
        if self.normalized == normalized_query {
            Some(MatchTier::Exact)
        } else if self.normalized.starts_with(normalized_query) {
            Some(MatchTier::Prefix)
        } else if self.normalized.contains(normalized_query) {
            Some(MatchTier::Substring)
        } else {
            None
        }
    }
}

/// List the immediate subdirectories of `base_dir`, sorted by name.
///
/// Symlinks that point at directories count as subdirectories.
pub fn list_subdirectories(base_dir: &Path) -> io::Result<Vec<Candidate>> {
    let mut candidates: Vec<Candidate> = std::fs::read_dir(base_dir)?
        .filter_map(|e| e.ok())
        .filter(|entry| entry.path().is_dir())
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            Candidate::new(name, entry.path())
        })
        .collect();
    candidates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(candidates)
}

/// Keep the candidates matching `normalized_query`, ordered exact, then
/// prefix, then substring. Listing order is preserved inside a tier and a
/// name is kept only the first time it is seen.
pub fn rank_candidates(entries: &[Candidate], normalized_query: &str) -> Vec<Candidate> {
    let mut ranked: Vec<(MatchTier, &Candidate)> = entries
        .iter()
        .filter_map(|c| c.tier(normalized_query).map(|tier| (tier, c)))
        .collect();
    // stable: listing order survives within a tier
    ranked.sort_by_key(|(tier, _)| *tier);

    let mut seen = HashSet::new();
    ranked
        .into_iter()
        .filter(|&(_, c)| seen.insert(c.name.as_str()))
        .map(|(_, c)| c.clone())
        .collect()
}
