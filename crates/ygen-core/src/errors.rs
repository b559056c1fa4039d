//! Tree construction error types.

use thiserror::Error;

use crate::tree::NodeId;

/// Errors raised while building a [`SchemaTree`](crate::SchemaTree).
#[derive(Debug, Error)]
pub enum TreeError {
    /// The parent already declares a child with this name.
    #[error("Duplicate child '{name}' under {parent}")]
    DuplicateSibling { parent: String, name: String },

    /// Leaves cannot hold children.
    #[error("Cannot add children to leaf node {path}")]
    NotADirectory { path: String },

    /// The node id does not belong to this tree.
    #[error("Unknown node {0}")]
    UnknownNode(NodeId),

    /// Fixture JSON was malformed or did not match the node description shape.
    #[error("Invalid schema description: {0}")]
    Json(#[from] serde_json::Error),
}
