//! A source root paired with the directives that select from it

use osm_select::{Directive, ResolveObserver, Resolver, ResultSet, TracingObserver};
use std::path::Path;

use crate::{OsmConfig, Result};

/// Directives bound to a source root.
///
/// Directives are parsed when the selection is built, so configuration
/// errors surface before any vault is touched. The selection itself is
/// resolved afresh on every call.
#[derive(Debug, Clone)]
pub struct Selection {
    resolver: Resolver,
    directives: Vec<Directive>,
}

impl Selection {
    /// Bind the configuration's directives to `source_root`.
    pub fn new(source_root: impl AsRef<Path>, config: &OsmConfig) -> Result<Self> {
        Self::with_directives(source_root, config.directives()?)
    }

    /// Bind an already-parsed directive list to `source_root`.
    pub fn with_directives(source_root: impl AsRef<Path>, directives: Vec<Directive>) -> Result<Self> {
        Ok(Self {
            resolver: Resolver::new(source_root)?,
            directives,
        })
    }

    /// The canonical source root.
    pub fn root(&self) -> &Path {
        self.resolver.root()
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Resolve the directives against the source root, logging each
    /// directive's matches at debug level.
    pub fn select(&self) -> Result<ResultSet> {
        self.select_with(&mut TracingObserver)
    }

    /// Resolve against the source root, reporting each directive.
    pub fn select_with<O>(&self, observer: &mut O) -> Result<ResultSet>
    where
        O: ResolveObserver + ?Sized,
    {
        Ok(self.resolver.resolve_with(&self.directives, observer)?)
    }

    /// Resolve the same directives against another root.
    pub fn select_in(&self, other_root: &Resolver) -> Result<ResultSet> {
        Ok(other_root.resolve(&self.directives)?)
    }
}
