//! SHA-256 checksum utilities
//!
//! Checksums use the canonical format `sha256:<hex>` and decide whether a
//! destination file already matches its source.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of in-memory content.
pub fn compute_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Compute the SHA-256 checksum of a file's contents.
pub fn compute_file_checksum(path: &Path) -> Result<String> {
    let content = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(compute_checksum(&content))
}

/// True when both files exist and hold the same bytes.
///
/// Sizes are compared first so differing files are usually rejected
/// without hashing.
pub fn files_identical(a: &Path, b: &Path) -> Result<bool> {
    let meta_a = fs::metadata(a).map_err(|e| Error::io(a, e))?;
    let meta_b = fs::metadata(b).map_err(|e| Error::io(b, e))?;
    if meta_a.len() != meta_b.len() {
        return Ok(false);
    }
    Ok(compute_file_checksum(a)? == compute_file_checksum(b)?)
}
