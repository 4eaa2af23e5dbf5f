//! Shared test helpers.

use std::collections::HashMap;

use tracing_subscriber::EnvFilter;
use waymark_checkpoints::NetworkProfile;
use waymark_core::constants::NetworkType;
use waymark_core::types::{ChainNode, Hash256};

/// Genesis hash used for the production profile in tests.
pub const TEST_GENESIS: Hash256 = Hash256([0x01; 32]);

/// Install a test-writer subscriber once; later calls are no-ops.
///
/// Honours `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// The production profile with [`TEST_GENESIS`] at height 0.
pub fn mainnet() -> NetworkProfile {
    NetworkProfile::resolve(NetworkType::Mainnet, TEST_GENESIS).unwrap()
}

/// A hash that is not in any compiled-in table.
pub fn foreign_hash(seed: u8) -> Hash256 {
    let mut bytes = [0xF0; 32];
    bytes[0] = seed;
    Hash256(bytes)
}

/// Chain node with the given fields.
pub fn node(height: u64, hash: Hash256, cumulative_tx_count: u64, timestamp: u64) -> ChainNode {
    ChainNode {
        height,
        hash,
        cumulative_tx_count,
        timestamp,
    }
}

/// Index holding the profile's checkpoint blocks at `heights`.
pub fn index_at_checkpoints(
    profile: &NetworkProfile,
    heights: &[u64],
) -> HashMap<Hash256, ChainNode> {
    heights
        .iter()
        .map(|&height| {
            let hash = *profile
                .table()
                .get(height)
                .unwrap_or_else(|| panic!("no checkpoint at height {height}"));
            (hash, node(height, hash, height, 0))
        })
        .collect()
}
