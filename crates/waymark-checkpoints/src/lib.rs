//! # waymark-checkpoints — advisory checkpoint layer for chain validation.
//!
//! A fixed table of known-good `(height, hash)` pairs per network, used to:
//!
//! - reject a block at a checkpointed height whose hash differs
//!   ([`validator::check_block`]),
//! - anchor sync to the highest checkpoint already in the local index
//!   ([`anchor::last_checkpoint`]),
//! - estimate initial-sync progress with a two-regime verification cost
//!   model ([`progress::estimate_progress`]).
//!
//! Every query takes the enforcement toggle explicitly; with it off the
//! checkpoints are never consulted. Nothing here performs cryptographic
//! verification or handles reorganisations.
//!
//! ```
//! use waymark_checkpoints::NetworkProfile;
//! use waymark_core::constants::NetworkType;
//! use waymark_core::types::Hash256;
//!
//! let profile = NetworkProfile::resolve(NetworkType::Mainnet, Hash256([1; 32])).unwrap();
//! assert_eq!(profile.highest_checkpoint_height(true), 60_000);
//! assert!(profile.check_block(0, &Hash256([1; 32]), true));
//! assert!(!profile.check_block(0, &Hash256::ZERO, true));
//! assert!(profile.check_block(0, &Hash256::ZERO, false));
//! ```

pub mod anchor;
pub mod config;
pub mod data;
pub mod profile;
pub mod progress;
pub mod table;
pub mod validator;

pub use config::CheckpointConfig;
pub use profile::NetworkProfile;
pub use progress::{Clock, FixedClock, SystemClock};
pub use table::{CheckpointMetadata, CheckpointTable, CheckpointTableBuilder, DuplicatePolicy};
