//! # ygen-compress
//!
//! Computes, for one schema node at a time, the set of data tree children a
//! code generator should materialize as fields.
//!
//! With compression disabled these are the declared children, with
//! choice/case wrappers flattened away. With compression enabled two
//! OpenConfig look-aheads are applied on top:
//!
//! 1. `config` and `state` containers are removed and their leaves are
//!    hoisted to the parent. Leaves present in both are taken from the
//!    preferred container; operational leaves that exist only under the
//!    other container are kept.
//! 2. A container whose only child is a list is replaced by that list.
//!
//! Given:
//!
//! ```text
//! /interface (list)
//! /interface/config/admin-state
//! /interface/state/admin-state
//! /interface/state/oper-state
//! /interface/state/counters/in-pkts
//! /interface/subinterfaces/subinterface (list)
//! ```
//!
//! the compressed children of `/interface` are `admin-state`, `oper-state`,
//! `counters` and `subinterface`.
//!
//! Resolution never aborts. Name collisions are collected as
//! [`ResolveError`]s next to the best-effort child set, and the caller
//! decides whether they are fatal.

pub mod error;
pub mod flatten;
pub mod guard;
pub mod resolve;
pub mod resolved;
pub mod walk;

pub use error::ResolveError;
pub use flatten::flatten_wrapper;
pub use guard::GuardMode;
pub use resolve::resolve_children;
pub use resolved::ResolvedChildren;
pub use walk::{TreeResolution, resolve_tree};
pub use ygen_core::CompressionPolicy;
