//! Serializable node descriptions.
//!
//! `NodeSpec` is the hand-off format between a schema loader and this
//! workspace. A loader (or a test fixture) describes the tree as nested
//! specs, and [`SchemaTree::from_spec`] turns it into the arena form.
//! Children are a list rather than a map so declaration order survives
//! any JSON implementation.

use serde::{Deserialize, Serialize};

use crate::enums::{ConfigFlag, NodeKind};
use crate::errors::TreeError;
use crate::tree::{NodeId, SchemaTree};

/// Description of one schema node and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    pub kind: NodeKind,
    /// Absent means inherited from the parent.
    #[serde(default)]
    pub config: ConfigFlag,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            config: ConfigFlag::Inherited,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Leaf)
    }

    #[must_use]
    pub fn container(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Container)
    }

    #[must_use]
    pub fn list(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::List)
    }

    #[must_use]
    pub fn with_config(mut self, config: ConfigFlag) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn read_only(self) -> Self {
        self.with_config(ConfigFlag::ReadOnly)
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }
}

impl SchemaTree {
    /// Build a tree from a nested description.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] if the description declares duplicate siblings
    /// or gives a leaf children.
    pub fn from_spec(spec: &NodeSpec) -> Result<Self, TreeError> {
        let mut tree = Self::with_root(spec.name.clone(), spec.kind, spec.config);
        let root = tree.root().id();
        for child in &spec.children {
            tree.insert_spec(root, child)?;
        }
        Ok(tree)
    }

    /// Build a tree from a JSON-encoded [`NodeSpec`].
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Json`] for malformed input, otherwise the same
    /// errors as [`SchemaTree::from_spec`].
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let spec: NodeSpec = serde_json::from_str(json)?;
        Self::from_spec(&spec)
    }

    fn insert_spec(&mut self, parent: NodeId, spec: &NodeSpec) -> Result<(), TreeError> {
        let id = self.add_child(parent, spec.name.clone(), spec.kind, spec.config)?;
        for child in &spec.children {
            self.insert_spec(id, child)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_and_json_agree() {
        let built = NodeSpec::container("system").with_children([
            NodeSpec::container("config").with_child(NodeSpec::leaf("hostname")),
            NodeSpec::container("state")
                .read_only()
                .with_child(NodeSpec::leaf("hostname")),
        ]);
        let parsed: NodeSpec = serde_json::from_str(
            r#"{
                "name": "system",
                "kind": "container",
                "children": [
                    {"name": "config", "kind": "container", "children": [
                        {"name": "hostname", "kind": "leaf"}
                    ]},
                    {"name": "state", "kind": "container", "config": "read_only", "children": [
                        {"name": "hostname", "kind": "leaf"}
                    ]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn from_spec_preserves_structure() {
        let spec = NodeSpec::container("system").with_child(
            NodeSpec::container("state")
                .read_only()
                .with_child(NodeSpec::leaf("boot-time")),
        );
        let tree = SchemaTree::from_spec(&spec).unwrap();
        assert_eq!(tree.len(), 3);
        let boot = tree.find("/system/state/boot-time").unwrap();
        assert_eq!(boot.kind(), NodeKind::Leaf);
        assert_eq!(boot.config(), ConfigFlag::Inherited);
        assert!(boot.is_read_only());
    }

    #[test]
    fn from_spec_rejects_duplicate_siblings() {
        let spec = NodeSpec::container("system")
            .with_children([NodeSpec::leaf("hostname"), NodeSpec::leaf("hostname")]);
        let err = SchemaTree::from_spec(&spec).unwrap_err();
        assert!(matches!(err, TreeError::DuplicateSibling { .. }));
    }

    #[test]
    fn from_json_reports_malformed_input() {
        let err = SchemaTree::from_json(r#"{"name": "x", "kind": "widget"}"#).unwrap_err();
        assert!(matches!(err, TreeError::Json(_)));
    }
}
