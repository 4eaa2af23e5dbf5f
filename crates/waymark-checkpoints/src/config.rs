//! Checkpoint configuration.
//!
//! [`CheckpointConfig`] carries the enforcement toggle and the network
//! selection. It can be built programmatically or loaded from layered
//! sources: defaults, then an optional TOML file, then `WAYMARK_*`
//! environment variables (`WAYMARK_ENABLED=false`, `WAYMARK_NETWORK=testnet`).
//!
//! The toggle is still passed explicitly into each checkpoint query; this
//! type only decides its value.

use std::path::Path;

use serde::{Deserialize, Serialize};
use waymark_core::constants::NetworkType;
use waymark_core::error::{CheckpointError, ConfigError};
use waymark_core::types::Hash256;

use crate::profile::NetworkProfile;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "WAYMARK";

/// Settings supplied by the node's configuration layer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct CheckpointConfig {
    /// Whether checkpoints are consulted at all.
    pub enabled: bool,
    /// Which network's table is active.
    pub network: NetworkType,
}

impl Default for CheckpointConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            network: NetworkType::Mainnet,
        }
    }
}

impl CheckpointConfig {
    /// Defaults with the network chosen by the "use test network" flag.
    pub fn from_testnet_flag(testnet: bool) -> Self {
        Self {
            network: NetworkType::from_testnet_flag(testnet),
            ..Self::default()
        }
    }

    /// Load from defaults, an optional TOML file and the environment.
    ///
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(false),
            );
        }
        let settings = builder
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| ConfigError::Source(e.to_string()))?;
        settings
            .try_deserialize()
            .map_err(|e| ConfigError::Deserialize(e.to_string()))
    }

    /// Resolve the configured network's profile.
    pub fn resolve_profile(
        &self,
        genesis_hash: Hash256,
    ) -> Result<NetworkProfile, CheckpointError> {
        NetworkProfile::resolve(self.network, genesis_hash)
    }
}
