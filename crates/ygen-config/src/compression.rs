//! Compression settings for child resolution.

use serde::{Deserialize, Serialize};
use ygen_core::CompressionPolicy;

use crate::error::ConfigError;

/// How generated types are derived from the schema tree.
///
/// The boolean flags are the legacy generator switches. `behaviour` names a
/// policy directly; when both are given they must agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompressionConfig {
    /// Elide `config`/`state` containers and list wrapper containers.
    #[serde(default)]
    pub compress_paths: bool,

    /// Drop read-only (derived state) nodes and their subtrees.
    #[serde(default)]
    pub exclude_state: bool,

    /// Take mirrored leaves from `state` rather than `config`. Requires
    /// `compress_paths`.
    #[serde(default)]
    pub prefer_operational_state: bool,

    /// Explicit policy, e.g. `compressed_prefer_state`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behaviour: Option<CompressionPolicy>,
}

impl CompressionConfig {
    /// The policy these settings select.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `prefer_operational_state` is
    /// combined with `exclude_state` or set without `compress_paths`, or if
    /// `behaviour` contradicts the boolean flags.
    pub fn policy(&self) -> Result<CompressionPolicy, ConfigError> {
        let from_flags = self.policy_from_flags()?;
        match self.behaviour {
            None => Ok(from_flags),
            Some(behaviour) if !self.any_flag_set() || behaviour == from_flags => Ok(behaviour),
            Some(behaviour) => Err(ConfigError::InvalidValue {
                field: "compression.behaviour".to_string(),
                reason: format!("'{behaviour}' contradicts the flags, which select '{from_flags}'"),
            }),
        }
    }

    fn policy_from_flags(&self) -> Result<CompressionPolicy, ConfigError> {
        if !self.prefer_operational_state {
            return Ok(CompressionPolicy::translate(
                self.compress_paths,
                self.exclude_state,
            ));
        }
        if !self.compress_paths {
            return Err(ConfigError::InvalidValue {
                field: "compression.prefer_operational_state".to_string(),
                reason: "requires compress_paths".to_string(),
            });
        }
        if self.exclude_state {
            return Err(ConfigError::InvalidValue {
                field: "compression.prefer_operational_state".to_string(),
                reason: "cannot be combined with exclude_state".to_string(),
            });
        }
        Ok(CompressionPolicy::CompressedPreferState)
    }

    const fn any_flag_set(&self) -> bool {
        self.compress_paths || self.exclude_state || self.prefer_operational_state
    }
}
