//! Duplicate-name bookkeeping for resolved child sets.

use std::collections::HashSet;

use ygen_core::NodeRef;

use crate::error::ResolveError;
use crate::resolved::ResolvedChildren;

/// How a name collision is treated when adding a child.
#[derive(Debug, Clone, Copy)]
pub enum GuardMode<'w, 't> {
    /// Every collision is an error.
    Strict,
    /// Collisions on whitelisted names are dropped silently; others are errors.
    Tolerant(&'w HashSet<&'t str>),
}

impl<'t> ResolvedChildren<'t> {
    /// Insert `node` under `name` unless the name is already taken.
    ///
    /// An existing entry is never overwritten. Returns whether the node was
    /// inserted.
    pub fn add_child(
        &mut self,
        name: &'t str,
        node: NodeRef<'t>,
        mode: GuardMode<'_, 't>,
    ) -> bool {
        if !self.children.contains_key(name) {
            self.children.insert(name, node);
            return true;
        }

        if matches!(mode, GuardMode::Tolerant(whitelist) if whitelist.contains(name)) {
            return false;
        }

        let path = node.path();
        tracing::debug!(%path, child = name, "duplicate child name");
        self.errors.push(ResolveError::DuplicateChildName {
            name: name.to_string(),
            path,
        });
        false
    }
}
