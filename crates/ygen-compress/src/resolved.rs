//! The per-node result of child resolution.

use indexmap::IndexMap;
use ygen_core::NodeRef;

use crate::error::ResolveError;

/// Resolved direct children of one node, plus the errors found building them.
///
/// Values are handles into the input tree, possibly several levels below
/// the node that was resolved. Iteration follows insertion order, which is
/// deterministic for a given tree and policy; use
/// [`ordered_names`](Self::ordered_names) when emitting fields.
#[derive(Debug, Default)]
pub struct ResolvedChildren<'t> {
    pub(crate) children: IndexMap<&'t str, NodeRef<'t>>,
    pub(crate) errors: Vec<ResolveError>,
}

impl<'t> ResolvedChildren<'t> {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeRef<'t>> {
        self.children.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// `(name, node)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'t str, NodeRef<'t>)> + '_ {
        self.children.iter().map(|(&name, &node)| (name, node))
    }

    /// Child names sorted alphabetically.
    #[must_use]
    pub fn ordered_names(&self) -> Vec<&'t str> {
        let mut names: Vec<_> = self.children.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn errors(&self) -> &[ResolveError] {
        &self.errors
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (IndexMap<&'t str, NodeRef<'t>>, Vec<ResolveError>) {
        (self.children, self.errors)
    }
}
