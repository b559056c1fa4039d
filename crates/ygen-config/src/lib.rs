//! # ygen-config
//!
//! Layered configuration loading for ygen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`YGEN_*` prefix, `__` as separator)
//! 2. Project-level `.ygen/config.toml`
//! 3. User-level `~/.config/ygen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `YGEN_COMPRESSION__COMPRESS_PATHS` -> `compression.compress_paths`,
//! `YGEN_COMPRESSION__BEHAVIOUR` -> `compression.behaviour`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ygen_config::YgenConfig;
//!
//! let config = YgenConfig::load().expect("config");
//! let policy = config.compression.policy().expect("consistent compression settings");
//! println!("resolving children with {policy}");
//! ```

mod compression;
mod error;

pub use compression::CompressionConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct YgenConfig {
    #[serde(default)]
    pub compression: CompressionConfig,
}

impl YgenConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`YgenConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".ygen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("YGEN_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ygen").join("config.toml"))
    }
}
