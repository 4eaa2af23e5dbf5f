//! Core types: block identifiers and chain index entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HashError;
use crate::traits::ChainEntry;

/// A 32-byte block identifier.
///
/// Bytes are stored in the order they appear in the hex form, so
/// [`Hash256::from_hex`] and [`Display`](fmt::Display) round-trip exactly.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The zero hash (32 zero bytes).
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create a Hash256 from a byte array.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero hash.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a 64-character hex string, with or without a `0x` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark_core::types::Hash256;
    /// let hex = format!("0x{}", "01".repeat(32));
    /// let h = Hash256::from_hex(&hex).unwrap();
    /// assert_eq!(h, Hash256([1; 32]));
    /// assert!(Hash256::from_hex("0xabcd").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| HashError::InvalidHex(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| HashError::InvalidLength(bytes.len()))?;
        Ok(Self(arr))
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Hash256 {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A trusted `(height, hash)` pair.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Checkpoint {
    pub height: u64,
    pub hash: Hash256,
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.hash, self.height)
    }
}

/// A snapshot of one entry in the validation engine's block index.
///
/// The engine owns the real index; this is the minimal read-only view the
/// checkpoint layer needs, and also a convenient concrete type for callers
/// that keep their own `HashMap<Hash256, ChainNode>`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChainNode {
    /// Height of the block in its chain.
    pub height: u64,
    /// Block identifier.
    pub hash: Hash256,
    /// Total number of transactions from genesis through this block.
    pub cumulative_tx_count: u64,
    /// Block timestamp, Unix seconds.
    pub timestamp: u64,
}

impl ChainEntry for ChainNode {
    fn height(&self) -> u64 {
        self.height
    }

    fn hash(&self) -> Hash256 {
        self.hash
    }

    fn cumulative_tx_count(&self) -> u64 {
        self.cumulative_tx_count
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }
}
