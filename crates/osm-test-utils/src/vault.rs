//! [`TestVault`] builder for vault settings scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Files of a typical vault settings directory.
///
/// Each file written by [`TestVault::with_settings_tree`] holds its own
/// relative path as content, so every file is distinguishable.
pub const SETTINGS_TREE: &[&str] = &[
    "README.md",
    "config",
    "app.json",
    "appearance.json",
    "hotkeys.json",
    "core-plugins.json",
    "core-plugins-migration.json",
    "workspace.json",
    "workspace-mobile.json",
    "command-palette.json",
    "plugins/buttons/main.js",
    "plugins/buttons/data.json",
    "plugins/auto-note-mover/main.js",
    "snippets/x.md",
    "themes/Minimal/theme.css",
];

/// A temporary vault settings directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use osm_test_utils::TestVault;
///
/// let vault = TestVault::with_settings_tree();
/// vault.write("snippets/extra.css", "body {}");
/// vault.assert_file_exists("plugins/buttons/main.js");
/// ```
pub struct TestVault {
    temp_dir: TempDir,
}

impl Default for TestVault {
    fn default() -> Self {
        Self::new()
    }
}

impl TestVault {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a vault populated with [`SETTINGS_TREE`].
    pub fn with_settings_tree() -> Self {
        let vault = Self::new();
        for file in SETTINGS_TREE {
            vault.write(file, file);
        }
        vault
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the vault.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
    }

    /// Create the directory `rel` and its parents.
    pub fn mkdir(&self, rel: &str) {
        fs::create_dir_all(self.path(rel)).unwrap();
    }

    /// Read `rel` as UTF-8.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, rel: &str) -> String {
        let path = self.path(rel);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `rel` exists.
    pub fn assert_file_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `rel` does **not** exist.
    pub fn assert_file_not_exists(&self, rel: &str) {
        let full_path = self.path(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `rel` holds exactly `content`.
    pub fn assert_file_content(&self, rel: &str, content: &str) {
        let actual = self.read(rel);
        assert_eq!(
            actual,
            content,
            "Unexpected content in {}",
            self.path(rel).display()
        );
    }
}
