//! Arena-owned schema tree.
//!
//! Nodes live in a single `Vec` owned by [`SchemaTree`] and are addressed by
//! [`NodeId`]. Consumers navigate through [`NodeRef`], a `Copy` handle that
//! borrows the tree, so resolved child sets hold references into the tree
//! rather than copies of node bodies.
//!
//! ```
//! use ygen_core::{ConfigFlag, NodeKind, SchemaTree};
//!
//! let mut tree = SchemaTree::new("interfaces", NodeKind::Container);
//! let root = tree.root().id();
//! let state = tree
//!     .add_child(root, "state", NodeKind::Container, ConfigFlag::ReadOnly)
//!     .unwrap();
//! let counter = tree
//!     .add_child(state, "in-pkts", NodeKind::Leaf, ConfigFlag::Inherited)
//!     .unwrap();
//!
//! let node = tree.get(counter).unwrap();
//! assert_eq!(node.path(), "/interfaces/state/in-pkts");
//! assert!(node.is_read_only());
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::enums::{CONFIG_CONTAINER, ConfigFlag, NodeKind, STATE_CONTAINER};
use crate::errors::TreeError;

/// Index of a node inside its owning [`SchemaTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    name: String,
    kind: NodeKind,
    config: ConfigFlag,
    parent: Option<NodeId>,
    /// Declaration order is preserved; it drives resolution priority.
    children: IndexMap<String, NodeId>,
}

/// An immutable-after-construction schema tree.
#[derive(Debug, Clone)]
pub struct SchemaTree {
    nodes: Vec<NodeData>,
}

impl SchemaTree {
    const ROOT: NodeId = NodeId(0);

    /// Create a tree holding only a root node with inherited (writable) visibility.
    #[must_use]
    pub fn new(root_name: impl Into<String>, kind: NodeKind) -> Self {
        Self::with_root(root_name, kind, ConfigFlag::Inherited)
    }

    /// Create a tree whose root carries an explicit visibility flag.
    #[must_use]
    pub fn with_root(root_name: impl Into<String>, kind: NodeKind, config: ConfigFlag) -> Self {
        Self {
            nodes: vec![NodeData {
                name: root_name.into(),
                kind,
                config,
                parent: None,
                children: IndexMap::new(),
            }],
        }
    }

    /// Append a child to `parent`, after any children it already declares.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] if `parent` is not in this tree,
    /// [`TreeError::NotADirectory`] if `parent` is a leaf, and
    /// [`TreeError::DuplicateSibling`] if `parent` already has a child named `name`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        kind: NodeKind,
        config: ConfigFlag,
    ) -> Result<NodeId, TreeError> {
        let parent_ref = self.get(parent).ok_or(TreeError::UnknownNode(parent))?;
        if !parent_ref.is_dir() {
            return Err(TreeError::NotADirectory {
                path: parent_ref.path(),
            });
        }
        let name = name.into();
        if parent_ref.child(&name).is_some() {
            return Err(TreeError::DuplicateSibling {
                parent: parent_ref.path(),
                name,
            });
        }

        let id = NodeId(self.nodes.len());
        self.nodes[parent.0].children.insert(name.clone(), id);
        self.nodes.push(NodeData {
            name,
            kind,
            config,
            parent: Some(parent),
            children: IndexMap::new(),
        });
        Ok(id)
    }

    #[must_use]
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            tree: self,
            id: Self::ROOT,
        }
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Look up a node by its slash-separated path, e.g. `/interfaces/interface/config`.
    ///
    /// The first segment must name the root.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<NodeRef<'_>> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let root = self.root();
        if segments.next()? != root.name() {
            return None;
        }
        segments.try_fold(root, |node, segment| node.child(segment))
    }

    /// Every node in insertion order, root first.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeRef<'_>> {
        (0..self.nodes.len()).map(move |i| NodeRef {
            tree: self,
            id: NodeId(i),
        })
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }
}

/// A borrowed handle to one node of a [`SchemaTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t SchemaTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    #[must_use]
    pub const fn id(self) -> NodeId {
        self.id
    }

    #[must_use]
    pub const fn tree(self) -> &'t SchemaTree {
        self.tree
    }

    #[must_use]
    pub fn name(self) -> &'t str {
        &self.tree.data(self.id).name
    }

    #[must_use]
    pub fn kind(self) -> NodeKind {
        self.tree.data(self.id).kind
    }

    /// The declared (not effective) visibility flag.
    #[must_use]
    pub fn config(self) -> ConfigFlag {
        self.tree.data(self.id).config
    }

    #[must_use]
    pub fn parent(self) -> Option<Self> {
        self.tree.data(self.id).parent.map(|id| Self {
            tree: self.tree,
            id,
        })
    }

    /// Declared children, in declaration order.
    pub fn children(self) -> impl ExactSizeIterator<Item = NodeRef<'t>> + 't {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .values()
            .map(move |&id| NodeRef { tree, id })
    }

    #[must_use]
    pub fn child(self, name: &str) -> Option<Self> {
        self.tree
            .data(self.id)
            .children
            .get(name)
            .map(|&id| Self {
                tree: self.tree,
                id,
            })
    }

    #[must_use]
    pub fn child_count(self) -> usize {
        self.tree.data(self.id).children.len()
    }

    /// Slash-separated path from the root, with a leading slash.
    #[must_use]
    pub fn path(self) -> String {
        let mut names = vec![self.name()];
        let mut cursor = self.parent();
        while let Some(node) = cursor {
            names.push(node.name());
            cursor = node.parent();
        }
        names.reverse();
        format!("/{}", names.join("/"))
    }

    /// Effective visibility: the nearest explicit flag on this node or an
    /// ancestor. A tree with no explicit flags is writable throughout.
    #[must_use]
    pub fn is_read_only(self) -> bool {
        let mut cursor = Some(self);
        while let Some(node) = cursor {
            match node.config() {
                ConfigFlag::ReadOnly => return true,
                ConfigFlag::Writable => return false,
                ConfigFlag::Inherited => cursor = node.parent(),
            }
        }
        false
    }

    #[must_use]
    pub fn is_dir(self) -> bool {
        self.kind().is_dir()
    }

    #[must_use]
    pub fn is_wrapper(self) -> bool {
        self.kind().is_wrapper()
    }

    #[must_use]
    pub fn is_list(self) -> bool {
        self.kind() == NodeKind::List
    }

    /// A container literally named `config` or `state`.
    #[must_use]
    pub fn is_config_state_container(self) -> bool {
        self.kind() == NodeKind::Container
            && matches!(self.name(), CONFIG_CONTAINER | STATE_CONTAINER)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("path", &self.path())
            .field("kind", &self.kind())
            .finish()
    }
}
