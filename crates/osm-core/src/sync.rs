//! Copying selected settings from a source vault into sibling vaults

use osm_select::{RelativePath, Resolver, ResultSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::checksum::files_identical;
use crate::{OsmConfig, Result, Selection, io};

/// Options for sync operations
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Report what would happen without writing or deleting anything
    pub dry_run: bool,
    /// Delete destination files that the directives select there but that
    /// the source selection does not contain
    pub remove_stale: bool,
}

/// What a sync does with one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Copy,
    Unchanged,
    Remove,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Copy => "copy",
            Self::Unchanged => "unchanged",
            Self::Remove => "remove",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncAction {
    pub kind: ActionKind,
    pub path: RelativePath,
}

/// Report from syncing one destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub dry_run: bool,
    /// Source and destination are the same directory; nothing was done
    pub skipped_same_root: bool,
    /// Planned (dry run) or performed actions, copies first, in path order
    pub actions: Vec<SyncAction>,
}

impl SyncReport {
    fn new(source: &Path, dest: &Path, dry_run: bool) -> Self {
        Self {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
            dry_run,
            skipped_same_root: false,
            actions: Vec::new(),
        }
    }

    /// Number of actions of the given kind.
    pub fn count(&self, kind: ActionKind) -> usize {
        self.actions.iter().filter(|a| a.kind == kind).count()
    }

    /// True when the destination needed no copies or removals.
    pub fn is_noop(&self) -> bool {
        self.actions.iter().all(|a| a.kind == ActionKind::Unchanged)
    }
}

/// Copies a vault's selected settings files into other vaults.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    selection: Selection,
}

impl SyncEngine {
    pub fn new(source_root: impl AsRef<Path>, config: &OsmConfig) -> Result<Self> {
        Ok(Self {
            selection: Selection::new(source_root, config)?,
        })
    }

    pub fn from_selection(selection: Selection) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Resolve the directives against the source root.
    pub fn select(&self) -> Result<ResultSet> {
        self.selection.select()
    }

    /// Bring `dest_root` in line with the source selection.
    ///
    /// The full plan is computed before anything is written: a failing
    /// directive or unreadable file leaves the destination untouched.
    /// Files whose destination content already matches are reported as
    /// unchanged and not rewritten.
    pub fn sync_to(&self, dest_root: impl AsRef<Path>, options: SyncOptions) -> Result<SyncReport> {
        self.sync_into(&Resolver::new(dest_root)?, options)
    }

    /// Sync several destinations in order.
    ///
    /// Every destination root is checked before the first one is written,
    /// so a mistyped path stops the run with all vaults untouched.
    pub fn sync_all<P: AsRef<Path>>(
        &self,
        dest_roots: &[P],
        options: SyncOptions,
    ) -> Result<Vec<SyncReport>> {
        let dests = dest_roots
            .iter()
            .map(Resolver::new)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        dests
            .iter()
            .map(|dest| self.sync_into(dest, options))
            .collect()
    }

    fn sync_into(&self, dest: &Resolver, options: SyncOptions) -> Result<SyncReport> {
        let source = self.selection.root();
        let mut report = SyncReport::new(source, dest.root(), options.dry_run);

        if dest.root() == source {
            tracing::debug!(root = %source.display(), "Source and destination are the same, skipping");
            report.skipped_same_root = true;
            return Ok(report);
        }

        let selected = self.select()?;

        for path in selected.sorted() {
            let src_file = path.under(source);
            let dest_file = path.under(dest.root());
            let kind = if dest_file.is_file() && files_identical(&src_file, &dest_file)? {
                ActionKind::Unchanged
            } else {
                ActionKind::Copy
            };
            report.actions.push(SyncAction {
                kind,
                path: path.clone(),
            });
        }

        if options.remove_stale {
            let in_dest = self.selection.select_in(dest)?;
            for path in in_dest.sorted() {
                if !selected.contains(path) {
                    report.actions.push(SyncAction {
                        kind: ActionKind::Remove,
                        path: path.clone(),
                    });
                }
            }
        }

        for action in &report.actions {
            let src_file = action.path.under(source);
            let dest_file = action.path.under(dest.root());

            match (action.kind, options.dry_run) {
                (ActionKind::Unchanged, _) => {
                    tracing::debug!(path = %action.path, "Unchanged");
                }
                (kind, true) => {
                    tracing::info!("[dry-run] Would {} {}", kind, dest_file.display());
                }
                (ActionKind::Copy, false) => {
                    tracing::debug!(from = %src_file.display(), to = %dest_file.display(), "Copying");
                    io::copy_atomic(&src_file, &dest_file)?;
                }
                (ActionKind::Remove, false) => {
                    tracing::debug!(path = %dest_file.display(), "Removing stale file");
                    io::remove_file(&dest_file)?;
                }
            }
        }

        Ok(report)
    }
}
