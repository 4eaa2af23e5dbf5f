//! Network profiles: the checkpoint table chosen for a network.
//!
//! A [`NetworkProfile`] is resolved once at startup and then passed by
//! reference (or in an `Arc`) to whatever needs checkpoint answers. It is
//! never mutated, so it can be shared across threads without locking.

use tracing::{info, warn};
use waymark_core::constants::{NetworkType, TESTNET_GENESIS_HASH_HEX};
use waymark_core::error::CheckpointError;
use waymark_core::traits::{BlockIndex, ChainEntry};
use waymark_core::types::Hash256;

use crate::data::{MAINNET_CHECKPOINTS, MAINNET_METADATA, TESTNET_CHECKPOINTS, TESTNET_METADATA};
use crate::table::{CheckpointTable, DuplicatePolicy};
use crate::{anchor, progress, validator};

/// The active checkpoint table together with the network it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkProfile {
    network: NetworkType,
    table: CheckpointTable,
}

impl NetworkProfile {
    /// Build the compiled-in table for `network`, pinning `genesis_hash` at
    /// height 0.
    ///
    /// Repeated heights in the compiled-in data are resolved last-write-wins
    /// and reported in the log; see [`CheckpointTable::shadowed_heights`].
    ///
    /// # Errors
    ///
    /// Fails if the compiled-in data is malformed, or if `genesis_hash` is
    /// also listed at another height.
    ///
    /// A testnet genesis other than the known one is accepted but logged.
    pub fn resolve(network: NetworkType, genesis_hash: Hash256) -> Result<Self, CheckpointError> {
        if network == NetworkType::Testnet {
            let known = testnet_genesis()?;
            if genesis_hash != known {
                warn!(
                    "testnet genesis {} differs from the known testnet genesis {}",
                    genesis_hash, known
                );
            }
        }

        let (entries, metadata) = match network {
            NetworkType::Mainnet => (MAINNET_CHECKPOINTS, MAINNET_METADATA),
            NetworkType::Testnet => (TESTNET_CHECKPOINTS, TESTNET_METADATA),
        };

        let table = CheckpointTable::builder(metadata)
            .duplicate_policy(DuplicatePolicy::LastWriteWins)
            .checkpoint(0, genesis_hash)
            .checkpoints_hex(entries)?
            .build()?;

        if !table.shadowed_heights().is_empty() {
            warn!(
                "{} checkpoint data repeats heights {:?}; verify against the chain",
                network,
                table.shadowed_heights()
            );
        }
        info!(
            "loaded {} {} checkpoints, highest at height {}",
            table.len(),
            network,
            table.highest_height().unwrap_or(0)
        );

        Ok(Self { network, table })
    }

    /// Testnet profile pinned to the known testnet genesis block.
    pub fn testnet() -> Result<Self, CheckpointError> {
        Self::resolve(NetworkType::Testnet, testnet_genesis()?)
    }

    /// Wrap an already-built table, e.g. one assembled in tests.
    pub fn from_table(network: NetworkType, table: CheckpointTable) -> Self {
        Self { network, table }
    }

    pub fn network(&self) -> NetworkType {
        self.network
    }

    pub fn table(&self) -> &CheckpointTable {
        &self.table
    }

    /// See [`validator::check_block`].
    pub fn check_block(&self, height: u64, hash: &Hash256, enabled: bool) -> bool {
        validator::check_block(&self.table, height, hash, enabled)
    }

    /// See [`anchor::last_checkpoint`].
    pub fn last_checkpoint<'a, I>(&self, index: &'a I, enabled: bool) -> Option<&'a I::Entry>
    where
        I: BlockIndex + ?Sized,
    {
        anchor::last_checkpoint(&self.table, index, enabled)
    }

    /// See [`progress::estimate_progress`].
    pub fn estimate_progress<E: ChainEntry>(
        &self,
        node: Option<&E>,
        now: u64,
        enabled: bool,
    ) -> f64 {
        progress::estimate_progress(&self.table, node, now, enabled)
    }

    /// See [`anchor::highest_checkpoint_height`].
    pub fn highest_checkpoint_height(&self, enabled: bool) -> u64 {
        anchor::highest_checkpoint_height(&self.table, enabled)
    }

    /// See [`anchor::is_in_checkpoint_zone`].
    pub fn is_in_checkpoint_zone(&self, height: u64, enabled: bool) -> bool {
        anchor::is_in_checkpoint_zone(&self.table, height, enabled)
    }
}

fn testnet_genesis() -> Result<Hash256, CheckpointError> {
    Hash256::from_hex(TESTNET_GENESIS_HASH_HEX)
        .map_err(|source| CheckpointError::InvalidHash { height: 0, source })
}
