//! Root-relative paths with a stable, platform-independent representation

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// A path relative to a resolution root.
///
/// Stored with forward slashes and without `.` components, so the same file
/// compares equal however its directive spelled it (`./a.json`, `a.json`,
/// `snippets/` and `snippets`). Ordering is the byte order of that string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelativePath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl RelativePath {
    /// Build a relative path, or `None` if the path is absolute, climbs
    /// out of the root with `..`, or has a component that is not UTF-8.
    pub fn try_new(path: impl AsRef<Path>) -> Option<Self> {
        let mut parts: Vec<String> = Vec::new();
        for component in path.as_ref().components() {
            match component {
                Component::Normal(part) => parts.push(part.to_str()?.to_owned()),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(Self {
            inner: parts.join("/"),
        })
    }

    /// Strip `root` from an absolute `path` found beneath it.
    pub fn from_root(root: &Path, path: &Path) -> Option<Self> {
        path.strip_prefix(root).ok().and_then(Self::try_new)
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// True for the root itself (a pattern such as `.`).
    pub fn is_root(&self) -> bool {
        self.inner.is_empty()
    }

    /// Convert to a platform-native relative PathBuf.
    pub fn to_native(&self) -> PathBuf {
        self.inner.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// The absolute location of this path under `root`.
    pub fn under(&self, root: &Path) -> PathBuf {
        if self.is_root() {
            root.to_path_buf()
        } else {
            root.join(self.to_native())
        }
    }
}

impl std::fmt::Display for RelativePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_root() {
            f.write_str(".")
        } else {
            f.write_str(&self.inner)
        }
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a.json", "a.json")]
    #[case("./a.json", "a.json")]
    #[case("snippets/", "snippets")]
    #[case("plugins/./buttons/main.js", "plugins/buttons/main.js")]
    #[case(".", "")]
    #[case("", "")]
    fn normalizes_components(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(RelativePath::try_new(input).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("/etc/passwd")]
    #[case("../sibling/file")]
    #[case("plugins/../../escape")]
    fn rejects_paths_outside_root(#[case] input: &str) {
        assert!(RelativePath::try_new(input).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn rejects_non_utf8_components() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"bad\xffname.css");
        assert!(RelativePath::try_new(Path::new("snippets").join(name)).is_none());
    }

    #[test]
    fn from_root_strips_prefix() {
        let root = Path::new("/vault/.obsidian");
        let rel = RelativePath::from_root(root, &root.join("plugins").join("main.js")).unwrap();
        assert_eq!(rel.as_str(), "plugins/main.js");
        assert!(RelativePath::from_root(root, Path::new("/elsewhere/file")).is_none());
    }

    #[test]
    fn root_displays_as_dot() {
        assert_eq!(RelativePath::try_new(".").unwrap().to_string(), ".");
    }

    #[test]
    fn ordering_is_byte_order() {
        let mut paths: Vec<RelativePath> = ["b.json", "B.json", "a/z", "a.json"]
            .iter()
            .map(|p| RelativePath::try_new(p).unwrap())
            .collect();
        paths.sort();
        let sorted: Vec<&str> = paths.iter().map(|p| p.as_str()).collect();
        assert_eq!(sorted, vec!["B.json", "a.json", "a/z", "b.json"]);
    }

    #[test]
    fn native_form_uses_platform_separators() {
        let rel = RelativePath::try_new("plugins/buttons/styles.css").unwrap();
        assert_eq!(
            rel.to_native(),
            PathBuf::from("plugins").join("buttons").join("styles.css")
        );
    }
}
