//! Direct child resolution for a single schema node.

use std::collections::HashSet;

use tracing::{debug, trace};
use ygen_core::{CompressionPolicy, NodeKind, NodeRef};

use crate::error::ResolveError;
use crate::flatten::flatten_wrapper;
use crate::guard::GuardMode;
use crate::resolved::ResolvedChildren;

/// Resolve the data tree children of `node` under `policy`.
///
/// Only `node`'s own children are resolved. A caller generating nested
/// types calls this again on each returned directory node.
///
/// When the policy excludes state and `node` is effectively read-only the
/// result is empty: read-only is inherited, so no descendant qualifies.
#[must_use]
pub fn resolve_children(node: NodeRef<'_>, policy: CompressionPolicy) -> ResolvedChildren<'_> {
    if policy.state_excluded() && node.is_read_only() {
        trace!(path = %node.path(), %policy, "read-only node has no children under this policy");
        return ResolvedChildren::default();
    }

    let resolved = match policy.priority_names() {
        None => resolve_uncompressed(node, policy.state_excluded()),
        Some((priority, deprioritized)) => Compressor {
            node,
            exclude_state: policy.state_excluded(),
            priority,
            deprioritized,
            resolved: ResolvedChildren::default(),
            priority_names: HashSet::new(),
        }
        .run(),
    };

    debug!(
        path = %node.path(),
        %policy,
        children = resolved.len(),
        errors = resolved.errors().len(),
        "resolved children"
    );
    resolved
}

/// Declared children, minus excluded read-only ones, with wrappers flattened.
///
/// List key leafrefs are kept here: without compression the key leaves stay
/// inside `config`/`state`, so the leafref is the only key field.
fn resolve_uncompressed(node: NodeRef<'_>, exclude_state: bool) -> ResolvedChildren<'_> {
    let mut resolved = ResolvedChildren::default();
    for child in node.children() {
        if exclude_state && child.is_read_only() {
            trace!(path = %child.path(), "skipping read-only child");
            continue;
        }
        for candidate in flatten_wrapper(child) {
            resolved.add_child(candidate.name(), candidate, GuardMode::Strict);
        }
    }
    resolved
}

struct Compressor<'t> {
    node: NodeRef<'t>,
    exclude_state: bool,
    priority: &'static str,
    deprioritized: &'static str,
    resolved: ResolvedChildren<'t>,
    /// Names added from the priority container. Repeats of these under the
    /// deprioritized container are expected mirrors, not errors.
    priority_names: HashSet<&'t str>,
}

impl<'t> Compressor<'t> {
    fn run(mut self) -> ResolvedChildren<'t> {
        for child in self.processing_order() {
            self.process(child);
        }
        self.resolved
    }

    /// The priority container must be seen first so its leaves win and its
    /// names are whitelisted before the deprioritized container is scanned.
    fn processing_order(&self) -> Vec<NodeRef<'t>> {
        let mut order = Vec::with_capacity(self.node.child_count());
        let scheduled = if matches!(self.node.kind(), NodeKind::Container | NodeKind::List) {
            self.node.child(self.priority)
        } else {
            None
        };
        order.extend(scheduled);
        // Outside containers and lists the priority child is not processed at all.
        order.extend(
            self.node
                .children()
                .filter(|child| child.name() != self.priority),
        );
        order
    }

    fn process(&mut self, child: NodeRef<'t>) {
        if self.exclude_state && child.is_read_only() {
            trace!(path = %child.path(), "skipping read-only child");
            return;
        }

        if child.is_config_state_container() {
            self.absorb_config_state(child);
        } else if child.is_dir() {
            self.process_directory(child);
        } else if self.node.is_list() && child.kind() == NodeKind::LeafRef {
            // List keys are mirrored as leafrefs beside the config/state
            // containers that hold the real key leaves.
            trace!(path = %child.path(), "skipping list key leafref");
        } else {
            self.resolved
                .add_child(child.name(), child, GuardMode::Strict);
        }
    }

    /// Hoist the children of a `config` or `state` container to the parent.
    fn absorb_config_state(&mut self, container: NodeRef<'t>) {
        let is_priority = container.name() == self.priority;
        debug_assert!(is_priority || container.name() == self.deprioritized);

        for grandchild in container.children() {
            for candidate in flatten_wrapper(grandchild) {
                if candidate.is_config_state_container() {
                    let path = candidate.path();
                    debug!(%path, "nested config/state container");
                    self.resolved
                        .errors
                        .push(ResolveError::NestedConfigState { path });
                    continue;
                }

                let name = candidate.name();
                if is_priority {
                    self.resolved.add_child(name, candidate, GuardMode::Strict);
                    self.priority_names.insert(name);
                } else if !self.priority_names.contains(name) {
                    self.resolved
                        .add_child(name, candidate, GuardMode::Tolerant(&self.priority_names));
                }
            }
        }
    }

    fn process_directory(&mut self, dir: NodeRef<'t>) {
        let only_child = if dir.child_count() == 1 {
            dir.children().next()
        } else {
            None
        };

        match only_child {
            // Surrounding container of a list: the list itself is the child.
            Some(list) if list.is_list() => {
                if self.exclude_state && list.is_read_only() {
                    trace!(path = %list.path(), "skipping read-only list");
                } else {
                    self.resolved.add_child(list.name(), list, GuardMode::Strict);
                }
            }
            _ if dir.is_wrapper() => {
                for candidate in flatten_wrapper(dir) {
                    self.resolved
                        .add_child(candidate.name(), candidate, GuardMode::Strict);
                }
            }
            _ => {
                self.resolved.add_child(dir.name(), dir, GuardMode::Strict);
            }
        }
    }
}
