//! Error types for Waymark.
//!
//! Query operations never fail; only table construction and configuration
//! loading return these.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    #[error("invalid hex: {0}")] InvalidHex(String),
    #[error("invalid length: expected 32 bytes, got {0}")] InvalidLength(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("duplicate checkpoint height: {0}")] DuplicateHeight(u64),
    #[error("hash {hash} listed at heights {first} and {second}")]
    HashAtTwoHeights { hash: String, first: u64, second: u64 },
    #[error("bad hash at height {height}: {source}")]
    InvalidHash { height: u64, source: HashError },
    #[error("invalid metadata: {0}")] InvalidMetadata(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config source: {0}")] Source(String),
    #[error("config deserialize: {0}")] Deserialize(String),
    #[error("unknown network: {0}")] UnknownNetwork(String),
}
