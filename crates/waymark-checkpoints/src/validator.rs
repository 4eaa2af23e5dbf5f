//! Block hash verification against the active checkpoint table.
//!
//! Checkpoints are a sparse allow-list: they constrain only the heights they
//! name and leave everything else to the main validation engine.

use tracing::{debug, warn};
use waymark_core::types::Hash256;

use crate::table::CheckpointTable;

/// Check a candidate block at `height` against the checkpoints.
///
/// Returns `true` when enforcement is off, when `height` is not
/// checkpointed, or when `hash` matches the pinned hash exactly. Returns
/// `false` only for a mismatch at a checkpointed height.
pub fn check_block(table: &CheckpointTable, height: u64, hash: &Hash256, enabled: bool) -> bool {
    if !enabled {
        return true;
    }
    match table.get(height) {
        None => true,
        Some(expected) if expected == hash => {
            debug!("checkpoint passed at height {}: {}", height, hash);
            true
        }
        Some(expected) => {
            warn!(
                "checkpoint failed at height {}: expected {}, got {}",
                height, expected, hash
            );
            false
        }
    }
}
