//! Directive resolution: folding expansions into a selection, in order

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::observer::{NoopObserver, ResolveObserver};
use crate::{Directive, Error, RelativePath, Result, ResultSet, Verb, expand};

/// Apply one directive's expansion to the running selection.
pub fn accumulate(set: &mut ResultSet, verb: Verb, expansion: &[RelativePath]) {
    match verb {
        Verb::Include => {
            for path in expansion {
                set.insert(path.clone());
            }
        }
        Verb::Exclude => {
            for path in expansion {
                set.remove(path);
            }
        }
    }
}

/// Resolve `directives` against `root` in one call.
pub fn resolve(root: impl AsRef<Path>, directives: &[Directive]) -> Result<ResultSet> {
    Resolver::new(root)?.resolve(directives)
}

/// Resolves directive lists against one root directory.
///
/// The resolver holds no selection state of its own; each call to
/// [`Resolver::resolve`] starts from an empty [`ResultSet`] and reads the
/// filesystem afresh.
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    /// Create a resolver for `root`.
    ///
    /// The root is canonicalized so that glob matches can be made relative
    /// to it reliably.
    ///
    /// # Errors
    ///
    /// [`Error::RootNotFound`] if `root` does not exist or is not a directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let not_found = || Error::RootNotFound {
            root: root.to_path_buf(),
        };

        let canonical = dunce::canonicalize(root).map_err(|_| not_found())?;
        if !canonical.is_dir() {
            return Err(not_found());
        }

        Ok(Self { root: canonical })
    }

    /// The canonical root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `directives` in order into a fresh selection.
    pub fn resolve(&self, directives: &[Directive]) -> Result<ResultSet> {
        self.resolve_with(directives, &mut NoopObserver)
    }

    /// Resolve `directives`, reporting each step to `observer` before it is
    /// applied.
    ///
    /// Directives with a blank pattern are skipped. Any error aborts the
    /// whole pass; a partial selection is never returned.
    pub fn resolve_with<O>(&self, directives: &[Directive], observer: &mut O) -> Result<ResultSet>
    where
        O: ResolveObserver + ?Sized,
    {
        // Catch a root removed since construction before touching directives.
        if !self.root.is_dir() {
            return Err(Error::RootNotFound {
                root: self.root.clone(),
            });
        }

        let mut set = ResultSet::new();

        for (index, directive) in directives.iter().enumerate() {
            let pattern = directive.pattern.trim();
            if pattern.is_empty() {
                debug!(index, verb = %directive.verb, "Skipping directive with blank pattern");
                continue;
            }

            // Report the pattern exactly as it was expanded.
            let trimmed;
            let directive = if pattern.len() == directive.pattern.len() {
                directive
            } else {
                trimmed = Directive::new(directive.verb, pattern);
                &trimmed
            };

            let expansion = expand(&self.root, &directive.pattern)?;
            debug!(
                index,
                directive = %directive,
                kind = %expansion.kind,
                matched = expansion.len(),
                "Expanded directive"
            );

            observer.on_directive(index, directive, &expansion.files);
            accumulate(&mut set, directive.verb, &expansion.files);
        }

        debug!(root = %self.root.display(), selected = set.len(), "Resolution complete");
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(path: &str) -> RelativePath {
        RelativePath::try_new(path).unwrap()
    }

    #[test]
    fn include_then_exclude_removes() {
        let mut set = ResultSet::new();
        accumulate(&mut set, Verb::Include, &[rel("a.json")]);
        accumulate(&mut set, Verb::Exclude, &[rel("a.json")]);
        assert!(set.is_empty());
    }

    #[test]
    fn exclude_then_include_keeps() {
        let mut set = ResultSet::new();
        accumulate(&mut set, Verb::Exclude, &[rel("a.json")]);
        accumulate(&mut set, Verb::Include, &[rel("a.json")]);
        assert!(set.contains(&rel("a.json")));
    }

    #[test]
    fn observer_sees_the_pattern_that_was_expanded() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("app.json"), "{}").unwrap();
        let resolver = Resolver::new(dir.path()).unwrap();

        let mut seen = Vec::new();
        let mut observer = |_: usize, directive: &Directive, matched: &[RelativePath]| {
            seen.push((directive.pattern.clone(), matched.len()));
        };
        resolver
            .resolve_with(&[Directive::include("  app.json\t")], &mut observer)
            .unwrap();

        assert_eq!(seen, vec![("app.json".to_string(), 1)]);
    }

    #[test]
    fn missing_root_is_rejected() {
        let err = Resolver::new("/definitely/not/a/real/root").unwrap_err();
        assert!(matches!(err, Error::RootNotFound { .. }));
    }

    #[test]
    fn file_root_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "").unwrap();
        assert!(matches!(Resolver::new(&file), Err(Error::RootNotFound { .. })));
    }
}
