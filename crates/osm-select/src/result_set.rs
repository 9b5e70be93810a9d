//! The selection produced by one resolution pass

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::RelativePath;

/// How a finished selection is ordered for presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Byte order of the path string
    #[default]
    CaseSensitive,
    /// Lowercased comparison, ties broken by byte order
    CaseInsensitive,
}

/// Set of root-relative file paths selected by a list of directives.
///
/// Unordered while directives are being applied; use [`ResultSet::sorted`]
/// or [`ResultSet::sorted_by`] when presenting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    paths: HashSet<RelativePath>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path. Returns false if it was already present.
    pub fn insert(&mut self, path: RelativePath) -> bool {
        self.paths.insert(path)
    }

    /// Remove a path. Removing an absent path is a no-op returning false.
    pub fn remove(&mut self, path: &RelativePath) -> bool {
        self.paths.remove(path)
    }

    pub fn contains(&self, path: &RelativePath) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RelativePath> {
        self.paths.iter()
    }

    /// Paths in case-sensitive byte order.
    pub fn sorted(&self) -> Vec<&RelativePath> {
        self.sorted_by(SortOrder::CaseSensitive)
    }

    /// Paths in the requested presentation order.
    pub fn sorted_by(&self, order: SortOrder) -> Vec<&RelativePath> {
        let mut paths: Vec<&RelativePath> = self.paths.iter().collect();
        match order {
            SortOrder::CaseSensitive => paths.sort(),
            SortOrder::CaseInsensitive => paths.sort_by(|a, b| {
                a.as_str()
                    .to_lowercase()
                    .cmp(&b.as_str().to_lowercase())
                    .then_with(|| a.cmp(b))
            }),
        }
        paths
    }
}

impl IntoIterator for ResultSet {
    type Item = RelativePath;
    type IntoIter = std::collections::hash_set::IntoIter<RelativePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RelativePath;
    type IntoIter = std::collections::hash_set::Iter<'a, RelativePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

impl FromIterator<RelativePath> for ResultSet {
    fn from_iter<I: IntoIterator<Item = RelativePath>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}
