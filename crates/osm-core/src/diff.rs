//! Comparing a source vault's selection with a destination vault

use osm_select::{RelativePath, Resolver};
use serde::{Deserialize, Serialize};
use similar::TextDiff;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum::files_identical;
use crate::{Error, OsmConfig, Result, Selection};

/// State of one selected path, seen from the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    /// Same bytes on both sides
    Identical,
    /// Selected on both sides with different content
    Modified,
    /// Selected in the source only; a sync would create it
    Added,
    /// Selected in the destination only; a stale-removing sync would delete it
    Removed,
}

impl DiffStatus {
    /// One-character marker used in listings.
    pub fn marker(&self) -> char {
        match self {
            Self::Identical => '=',
            Self::Modified => 'M',
            Self::Added => '+',
            Self::Removed => '-',
        }
    }
}

impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Identical => "identical",
            Self::Modified => "modified",
            Self::Added => "added",
            Self::Removed => "removed",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub path: RelativePath,
    pub status: DiffStatus,
    /// Absolute path on the source side
    pub source: PathBuf,
    /// Absolute path on the destination side
    pub dest: PathBuf,
}

impl DiffEntry {
    /// Unified diff turning the destination file into the source file.
    ///
    /// Returns `None` for identical entries and for files that are not
    /// valid UTF-8. A missing side is treated as empty.
    pub fn unified_patch(&self) -> Result<Option<String>> {
        if self.status == DiffStatus::Identical {
            return Ok(None);
        }

        let (Some(old), Some(new)) = (read_text(&self.dest)?, read_text(&self.source)?) else {
            return Ok(None);
        };

        let old_header = format!("a/{}", self.path);
        let new_header = format!("b/{}", self.path);
        let patch = TextDiff::from_lines(&old, &new)
            .unified_diff()
            .context_radius(3)
            .header(&old_header, &new_header)
            .to_string();
        Ok(Some(patch))
    }
}

/// Missing files read as empty text; non-UTF-8 files as `None`.
fn read_text(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(Some(String::new()));
    }
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(String::from_utf8(bytes).ok())
}

/// Comparison of one destination against the source selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub skipped_same_root: bool,
    /// One entry per path selected on either side, in path order
    pub entries: Vec<DiffEntry>,
}

impl DiffReport {
    /// True when a sync would copy or remove anything.
    pub fn has_changes(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.status != DiffStatus::Identical)
    }

    pub fn count(&self, status: DiffStatus) -> usize {
        self.entries.iter().filter(|e| e.status == status).count()
    }

    /// Entries other than [`DiffStatus::Identical`].
    pub fn changes(&self) -> impl Iterator<Item = &DiffEntry> {
        self.entries
            .iter()
            .filter(|e| e.status != DiffStatus::Identical)
    }
}

/// Read-only comparison between a source vault and other vaults.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    selection: Selection,
}

impl DiffEngine {
    pub fn new(source_root: impl AsRef<Path>, config: &OsmConfig) -> Result<Self> {
        Ok(Self {
            selection: Selection::new(source_root, config)?,
        })
    }

    pub fn from_selection(selection: Selection) -> Self {
        Self { selection }
    }

    /// Compare the selection on both sides of `dest_root`.
    ///
    /// The same directives are resolved against both roots and every path
    /// in either result is classified.
    pub fn diff(&self, dest_root: impl AsRef<Path>) -> Result<DiffReport> {
        let source = self.selection.root();
        let dest = Resolver::new(dest_root)?;
        let mut report = DiffReport {
            source: source.to_path_buf(),
            dest: dest.root().to_path_buf(),
            skipped_same_root: false,
            entries: Vec::new(),
        };

        if dest.root() == source {
            report.skipped_same_root = true;
            return Ok(report);
        }

        let in_source = self.selection.select()?;
        let in_dest = self.selection.select_in(&dest)?;
        let all: BTreeSet<&RelativePath> = in_source.iter().chain(in_dest.iter()).collect();

        for path in all {
            let src_file = path.under(source);
            let dest_file = path.under(dest.root());
            let status = match (in_source.contains(path), in_dest.contains(path)) {
                (true, false) => DiffStatus::Added,
                (false, _) => DiffStatus::Removed,
                (true, true) if files_identical(&src_file, &dest_file)? => DiffStatus::Identical,
                (true, true) => DiffStatus::Modified,
            };
            report.entries.push(DiffEntry {
                path: path.clone(),
                status,
                source: src_file,
                dest: dest_file,
            });
        }

        tracing::debug!(
            dest = %report.dest.display(),
            entries = report.entries.len(),
            changed = report.changes().count(),
            "Diff complete"
        );
        Ok(report)
    }
}
