//! Constants shared by the checkpoint crates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How much costlier a transaction after the last checkpoint is to verify
/// than one before it.
///
/// A compromise figure: reindexing from a fast disk on a slow CPU can reach
/// 20, downloading over a slow link on a fast multicore machine stays close
/// to 1.
pub const VERIFICATION_COST_FACTOR: f64 = 5.0;

/// Seconds in one day, used to turn elapsed time into projected transactions.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Genesis block identifier of the public test network.
pub const TESTNET_GENESIS_HASH_HEX: &str =
    "6031650e6a6e1ec11e6d7871ccf93d06375469cf08f565d9fc5a0079e4ad92e3";

/// Network type: Mainnet or Testnet.
///
/// Chosen once at startup; selects which checkpoint table is active.
///
/// # Examples
///
/// ```
/// use waymark_core::constants::NetworkType;
/// assert_eq!(NetworkType::default(), NetworkType::Mainnet);
/// assert_eq!(NetworkType::from_testnet_flag(true), NetworkType::Testnet);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    /// Production network.
    #[default]
    #[serde(alias = "main")]
    Mainnet,
    /// Public test network.
    #[serde(alias = "test")]
    Testnet,
}

impl NetworkType {
    /// Map the external "use test network" boolean onto a network type.
    pub fn from_testnet_flag(testnet: bool) -> Self {
        if testnet { Self::Testnet } else { Self::Mainnet }
    }

    /// Lowercase name used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Self::Mainnet),
            "testnet" | "test" => Ok(Self::Testnet),
            other => Err(ConfigError::UnknownNetwork(other.to_string())),
        }
    }
}
