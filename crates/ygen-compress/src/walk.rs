//! Whole-tree resolution driver.
//!
//! [`resolve_children`] handles one node. Code generators walk the tree by
//! resolving the root, then every directory node it returned, and so on.
//! [`resolve_tree`] does that walk and records the outcome per node path.

use std::collections::{BTreeMap, HashSet, VecDeque};

use tracing::{debug, warn};
use ygen_core::{CompressionPolicy, NodeRef};

use crate::error::ResolveError;
use crate::resolve::resolve_children;

/// Resolution of every directory reachable from a root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeResolution {
    /// Node path -> sorted resolved child names.
    children: BTreeMap<String, Vec<String>>,
    errors: Vec<ResolveError>,
}

impl TreeResolution {
    /// Sorted child names of the node at `path`, if it was visited.
    #[must_use]
    pub fn children_of(&self, path: &str) -> Option<&[String]> {
        self.children.get(path).map(Vec::as_slice)
    }

    /// Visited node paths, sorted.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    #[must_use]
    pub fn errors(&self) -> &[ResolveError] {
        &self.errors
    }
}

/// Resolve `root` and, breadth-first, every directory node it resolves to.
///
/// Errors from all visited nodes are collected in visiting order.
#[must_use]
pub fn resolve_tree(root: NodeRef<'_>, policy: CompressionPolicy) -> TreeResolution {
    let mut report = TreeResolution::default();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node.id()) {
            continue;
        }

        let resolved = resolve_children(node, policy);
        let path = node.path();
        if resolved.has_errors() {
            warn!(%path, errors = resolved.errors().len(), "child resolution reported errors");
        }
        debug!(%path, children = resolved.len(), "visited");

        queue.extend(resolved.iter().map(|(_, child)| child).filter(|c| c.is_dir()));
        let names = resolved
            .ordered_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let (_, errors) = resolved.into_parts();
        report.children.insert(path, names);
        report.errors.extend(errors);
    }

    report
}
