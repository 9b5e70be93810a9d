//! Diagnostic hooks for watching a resolution pass

use crate::{Directive, RelativePath};

/// Receives each directive and the files it expanded to, before the
/// directive is applied to the selection.
///
/// Observers are for diagnostics only and cannot change the result.
pub trait ResolveObserver {
    /// Called once per processed directive. `index` is the directive's
    /// position in the list that was passed to the resolver.
    fn on_directive(&mut self, index: usize, directive: &Directive, matched: &[RelativePath]);
}

impl<F> ResolveObserver for F
where
    F: FnMut(usize, &Directive, &[RelativePath]),
{
    fn on_directive(&mut self, index: usize, directive: &Directive, matched: &[RelativePath]) {
        self(index, directive, matched)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResolveObserver for NoopObserver {
    fn on_directive(&mut self, _index: usize, _directive: &Directive, _matched: &[RelativePath]) {}
}

/// Observer that emits a `tracing` debug event per directive and per file.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ResolveObserver for TracingObserver {
    fn on_directive(&mut self, index: usize, directive: &Directive, matched: &[RelativePath]) {
        tracing::debug!(
            index,
            verb = %directive.verb,
            pattern = %directive.pattern,
            matched = matched.len(),
            "Applying directive"
        );
        for path in matched {
            tracing::debug!(index, %path, "  matched");
        }
    }
}
