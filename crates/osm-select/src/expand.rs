//! Item expansion: turning one directive pattern into the files it denotes
//!
//! A pattern is tried, in this order, as
//! 1. a literal file under the root,
//! 2. a literal directory under the root (walked recursively),
//! 3. a glob expression anchored at the root.
//!
//! A pattern that names an existing file or directory is never
//! reinterpreted as a glob. Nothing is cached: every call reads the
//! filesystem as it is now.

use std::fs;
use std::io;
use std::path::{Component, Path};

use glob::{MatchOptions, Pattern};
use tracing::debug;
use walkdir::WalkDir;

use crate::{Error, RelativePath, Result};

/// How a pattern was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionKind {
    File,
    Directory,
    Glob,
}

impl std::fmt::Display for ExpansionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Glob => "glob",
        })
    }
}

/// The files one pattern currently denotes, relative to the root.
///
/// `files` is sorted and free of duplicates. It never contains directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub kind: ExpansionKind,
    pub files: Vec<RelativePath>,
}

impl Expansion {
    fn new(kind: ExpansionKind, mut files: Vec<RelativePath>) -> Self {
        files.sort();
        files.dedup();
        Self { kind, files }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Expand `pattern` against `root`.
///
/// A glob that matches nothing is an empty expansion, not an error.
///
/// # Errors
///
/// - [`Error::Pattern`] for an empty, absolute, or `..` pattern, or a glob
///   the matcher rejects.
/// - [`Error::NonUtf8Root`] when a glob has to be anchored at a root that
///   is not valid UTF-8.
/// - [`Error::Expansion`] when reading the filesystem fails part way, when
///   the target cannot be inspected for a reason other than not existing,
///   or when a matched file name is not valid UTF-8.
pub fn expand(root: &Path, pattern: &str) -> Result<Expansion> {
    let literal = literal_target(pattern)?;
    let target = literal.under(root);

    match fs::metadata(&target) {
        Ok(meta) if meta.is_file() => {
            return Ok(Expansion::new(ExpansionKind::File, vec![literal]));
        }
        Ok(meta) if meta.is_dir() => {
            return walk_directory(root, &target, pattern)
                .map(|files| Expansion::new(ExpansionKind::Directory, files));
        }
        // A literal that exists but cannot be inspected must not silently
        // turn into an empty glob. Glob patterns report their own read errors.
        Err(err) if !is_absent(&err) && Pattern::escape(pattern) == pattern => {
            return Err(Error::expansion(pattern, target, err));
        }
        _ => {}
    }

    expand_glob(root, pattern).map(|files| Expansion::new(ExpansionKind::Glob, files))
}

fn is_absent(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Validate the pattern's shape and build its literal interpretation.
fn literal_target(pattern: &str) -> Result<RelativePath> {
    if pattern.trim().is_empty() {
        return Err(Error::pattern(pattern, "pattern is empty"));
    }

    for component in Path::new(pattern).components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {
                return Err(Error::pattern(pattern, "pattern must be relative to the root"));
            }
            Component::ParentDir => {
                return Err(Error::pattern(pattern, "pattern must not contain `..`"));
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }

    RelativePath::try_new(pattern)
        .ok_or_else(|| Error::pattern(pattern, "pattern must stay inside the root"))
}

/// Every regular file beneath `dir`, relative to `root`.
fn walk_directory(root: &Path, dir: &Path, pattern: &str) -> Result<Vec<RelativePath>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| dir.to_path_buf());

                // A dangling link is not a file; a loop or unreadable dir is fatal.
                let dangling = err.loop_ancestor().is_none()
                    && err.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound);
                if dangling {
                    debug!(path = %path.display(), "Skipping dangling link");
                    continue;
                }
                return Err(Error::expansion(pattern, path, err.into()));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        files.push(relative_to_root(root, entry.path(), pattern)?);
    }

    Ok(files)
}

/// Every regular file matching the glob `pattern`, anchored at `root`.
fn expand_glob(root: &Path, pattern: &str) -> Result<Vec<RelativePath>> {
    Pattern::new(pattern).map_err(|e| {
        Error::pattern(pattern, format!("{} (at position {})", e.msg, e.pos))
    })?;

    let root_str = root.to_str().ok_or_else(|| Error::NonUtf8Root {
        root: root.to_path_buf(),
    })?;
    let anchored = format!(
        "{}/{}",
        Pattern::escape(root_str.trim_end_matches(['/', '\\'])),
        pattern
    );

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let matches = glob::glob_with(&anchored, options)
        .map_err(|e| Error::pattern(pattern, e.msg))?;

    let mut files = Vec::new();
    for entry in matches {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                let path = err.path().to_path_buf();
                return Err(Error::expansion(pattern, path, err.into_error()));
            }
        };

        if path.is_file() {
            files.push(relative_to_root(root, &path, pattern)?);
        }
    }

    Ok(files)
}

fn relative_to_root(root: &Path, path: &Path, pattern: &str) -> Result<RelativePath> {
    let invalid = |message: &str| {
        Error::expansion(
            pattern,
            path,
            io::Error::new(io::ErrorKind::InvalidData, message.to_string()),
        )
    };

    let relative = path
        .strip_prefix(root)
        .map_err(|_| invalid("matched path lies outside the root"))?;
    if relative.to_str().is_none() {
        return Err(invalid("file name is not valid UTF-8"));
    }
    RelativePath::try_new(relative).ok_or_else(|| invalid("matched path lies outside the root"))
}
