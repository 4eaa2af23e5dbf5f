//! Sync anchoring: locating the highest checkpoint already in the local
//! block index, plus height hints derived from the table.

use tracing::trace;
use waymark_core::traits::BlockIndex;

use crate::table::CheckpointTable;

/// Highest-height checkpoint whose block is present in `index`.
///
/// Walks the checkpoints from the top down and stops at the first hit, so
/// the cost is bounded by the table size. Returns `None` when enforcement
/// is off or no checkpoint hash is indexed.
pub fn last_checkpoint<'a, I>(
    table: &CheckpointTable,
    index: &'a I,
    enabled: bool,
) -> Option<&'a I::Entry>
where
    I: BlockIndex + ?Sized,
{
    if !enabled {
        return None;
    }
    table.checkpoints_descending().find_map(|cp| {
        let entry = index.get_by_hash(&cp.hash);
        if entry.is_some() {
            trace!("sync anchor found at checkpoint height {}", cp.height);
        }
        entry
    })
}

/// Highest checkpointed height, or 0 when enforcement is off or the table
/// is empty. A coarse lower bound on the height worth syncing to.
pub fn highest_checkpoint_height(table: &CheckpointTable, enabled: bool) -> u64 {
    if !enabled {
        return 0;
    }
    table.highest_height().unwrap_or(0)
}

/// Returns `true` if `height` is at or below the highest checkpoint.
///
/// Blocks in this zone are pinned, so a caller may refuse a reorganisation
/// that would disconnect them. Always `false` when enforcement is off or
/// the table is empty.
pub fn is_in_checkpoint_zone(table: &CheckpointTable, height: u64, enabled: bool) -> bool {
    enabled && table.highest_height().is_some_and(|top| height <= top)
}
