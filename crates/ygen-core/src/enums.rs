//! Node kinds, visibility flags, and compression policies.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so they can appear in schema fixtures and in `ygen` configuration files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the container holding intended (writable) configuration leaves.
pub const CONFIG_CONTAINER: &str = "config";

/// Name of the container holding applied/operational (read-only) leaves.
pub const STATE_CONTAINER: &str = "state";

// ---------------------------------------------------------------------------
// NodeKind
// ---------------------------------------------------------------------------

/// Structural kind of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Leaf,
    LeafRef,
    Container,
    List,
    Choice,
    Case,
}

impl NodeKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leaf => "leaf",
            Self::LeafRef => "leaf_ref",
            Self::Container => "container",
            Self::List => "list",
            Self::Choice => "choice",
            Self::Case => "case",
        }
    }

    /// Whether nodes of this kind can hold children.
    #[must_use]
    pub const fn is_dir(self) -> bool {
        !matches!(self, Self::Leaf | Self::LeafRef)
    }

    /// Choice and case nodes group alternatives and are never data tree nodes.
    #[must_use]
    pub const fn is_wrapper(self) -> bool {
        matches!(self, Self::Choice | Self::Case)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConfigFlag
// ---------------------------------------------------------------------------

/// Declared read/write visibility of a node.
///
/// `Inherited` defers to the nearest ancestor with an explicit flag. The
/// root of a tree is writable unless it says otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigFlag {
    Writable,
    ReadOnly,
    #[default]
    Inherited,
}

impl ConfigFlag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Writable => "writable",
            Self::ReadOnly => "read_only",
            Self::Inherited => "inherited",
        }
    }
}

impl fmt::Display for ConfigFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CompressionPolicy
// ---------------------------------------------------------------------------

/// How the direct children of a node are determined for code generation.
///
/// There are three dimensions here (compress, prefer state, exclude state)
/// and not every combination is meaningful, so they are folded into one
/// closed set of values.
///
/// | value                         | compress | preferred container | state excluded |
/// |-------------------------------|----------|---------------------|----------------|
/// | `Uncompressed`                | no       | -                   | no             |
/// | `UncompressedStateExcluded`   | no       | -                   | yes            |
/// | `CompressedPreferConfig`      | yes      | `config`            | no             |
/// | `CompressedPreferState`       | yes      | `state`             | no             |
/// | `CompressedStateExcluded`     | yes      | `config`            | yes            |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionPolicy {
    #[default]
    Uncompressed,
    UncompressedStateExcluded,
    CompressedPreferConfig,
    CompressedPreferState,
    CompressedStateExcluded,
}

impl CompressionPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Uncompressed,
        Self::UncompressedStateExcluded,
        Self::CompressedPreferConfig,
        Self::CompressedPreferState,
        Self::CompressedStateExcluded,
    ];

    /// Map the legacy `(compress_paths, exclude_state)` flag pair onto a policy.
    #[must_use]
    pub const fn translate(compress_paths: bool, exclude_state: bool) -> Self {
        match (compress_paths, exclude_state) {
            (true, true) => Self::CompressedStateExcluded,
            (true, false) => Self::CompressedPreferConfig,
            (false, true) => Self::UncompressedStateExcluded,
            (false, false) => Self::Uncompressed,
        }
    }

    #[must_use]
    pub const fn compression_enabled(self) -> bool {
        !matches!(self, Self::Uncompressed | Self::UncompressedStateExcluded)
    }

    /// Whether read-only nodes (and therefore their whole subtree) are dropped.
    #[must_use]
    pub const fn state_excluded(self) -> bool {
        matches!(
            self,
            Self::UncompressedStateExcluded | Self::CompressedStateExcluded
        )
    }

    /// The `(priority, deprioritized)` container names for compressed policies.
    ///
    /// Returns `None` when compression is disabled.
    #[must_use]
    pub const fn priority_names(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Uncompressed | Self::UncompressedStateExcluded => None,
            Self::CompressedPreferConfig | Self::CompressedStateExcluded => {
                Some((CONFIG_CONTAINER, STATE_CONTAINER))
            }
            Self::CompressedPreferState => Some((STATE_CONTAINER, CONFIG_CONTAINER)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Uncompressed => "uncompressed",
            Self::UncompressedStateExcluded => "uncompressed_state_excluded",
            Self::CompressedPreferConfig => "compressed_prefer_config",
            Self::CompressedPreferState => "compressed_prefer_state",
            Self::CompressedStateExcluded => "compressed_state_excluded",
        }
    }
}

impl fmt::Display for CompressionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(kind_leaf_ref, NodeKind, NodeKind::LeafRef, "leaf_ref");
    test_serde_roundtrip!(kind_choice, NodeKind, NodeKind::Choice, "choice");
    test_serde_roundtrip!(flag_read_only, ConfigFlag, ConfigFlag::ReadOnly, "read_only");
    test_serde_roundtrip!(
        policy_prefer_state,
        CompressionPolicy,
        CompressionPolicy::CompressedPreferState,
        "compressed_prefer_state"
    );
    test_serde_roundtrip!(
        policy_uncompressed_excluded,
        CompressionPolicy,
        CompressionPolicy::UncompressedStateExcluded,
        "uncompressed_state_excluded"
    );

    // --- Display matches serde ---

    #[test]
    fn display_matches_serde() {
        for policy in CompressionPolicy::ALL {
            let json = serde_json::to_string(&policy).unwrap();
            assert_eq!(json, format!("\"{policy}\""));
        }
    }

    // --- Policy predicates ---

    #[test]
    fn translate_covers_all_flag_pairs() {
        assert_eq!(
            CompressionPolicy::translate(true, true),
            CompressionPolicy::CompressedStateExcluded
        );
        assert_eq!(
            CompressionPolicy::translate(true, false),
            CompressionPolicy::CompressedPreferConfig
        );
        assert_eq!(
            CompressionPolicy::translate(false, true),
            CompressionPolicy::UncompressedStateExcluded
        );
        assert_eq!(
            CompressionPolicy::translate(false, false),
            CompressionPolicy::Uncompressed
        );
    }

    #[test]
    fn compression_enabled_only_for_compressed_values() {
        let enabled: Vec<_> = CompressionPolicy::ALL
            .into_iter()
            .filter(|p| p.compression_enabled())
            .collect();
        assert_eq!(
            enabled,
            vec![
                CompressionPolicy::CompressedPreferConfig,
                CompressionPolicy::CompressedPreferState,
                CompressionPolicy::CompressedStateExcluded,
            ]
        );
    }

    #[test]
    fn state_excluded_only_for_excluding_values() {
        let excluded: Vec<_> = CompressionPolicy::ALL
            .into_iter()
            .filter(|p| p.state_excluded())
            .collect();
        assert_eq!(
            excluded,
            vec![
                CompressionPolicy::UncompressedStateExcluded,
                CompressionPolicy::CompressedStateExcluded,
            ]
        );
    }

    #[test]
    fn priority_names_follow_preference() {
        assert_eq!(CompressionPolicy::Uncompressed.priority_names(), None);
        assert_eq!(
            CompressionPolicy::CompressedPreferConfig.priority_names(),
            Some(("config", "state"))
        );
        assert_eq!(
            CompressionPolicy::CompressedStateExcluded.priority_names(),
            Some(("config", "state"))
        );
        assert_eq!(
            CompressionPolicy::CompressedPreferState.priority_names(),
            Some(("state", "config"))
        );
    }

    #[test]
    fn wrapper_kinds_are_directories() {
        for kind in [NodeKind::Choice, NodeKind::Case] {
            assert!(kind.is_wrapper());
            assert!(kind.is_dir());
        }
        assert!(!NodeKind::Leaf.is_dir());
        assert!(!NodeKind::LeafRef.is_dir());
        assert!(!NodeKind::List.is_wrapper());
    }
}
