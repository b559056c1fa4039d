//! Structural errors found while resolving children.

use thiserror::Error;

/// A recoverable problem recorded during resolution.
///
/// These are accumulated on [`ResolvedChildren`](crate::ResolvedChildren)
/// rather than returned, so the caller always gets the partial child set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Two nodes flattened to the same name under one parent.
    ///
    /// `path` is the node that lost: the entry already in the set is kept.
    #[error("{path} was duplicate")]
    DuplicateChildName { name: String, path: String },

    /// A `config`/`state` container declared directly inside another one.
    #[error("{path} is a config/state container nested inside another config/state container")]
    NestedConfigState { path: String },
}

impl ResolveError {
    /// Schema path of the node the error is about.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::DuplicateChildName { path, .. } | Self::NestedConfigState { path } => path,
        }
    }
}
