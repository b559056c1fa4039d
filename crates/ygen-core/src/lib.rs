//! # ygen-core
//!
//! Core types shared by the ygen crates.
//!
//! This crate provides:
//! - `SchemaTree`: an immutable, arena-owned schema tree with `NodeRef` handles
//! - Node kinds, tri-state config visibility, and the `CompressionPolicy` model
//! - `NodeSpec`: the serde hand-off format a schema loader uses to build a tree
//! - Tree construction error types
//!
//! The tree is produced once by a loader and only read afterwards. Everything
//! downstream (the child resolver, the code generator) borrows it.

pub mod description;
pub mod enums;
pub mod errors;
pub mod tree;

pub use description::NodeSpec;
pub use enums::{CONFIG_CONTAINER, CompressionPolicy, ConfigFlag, NodeKind, STATE_CONTAINER};
pub use errors::TreeError;
pub use tree::{NodeId, NodeRef, SchemaTree};
