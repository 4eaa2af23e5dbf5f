//! Initial-sync progress estimation.
//!
//! Progress is measured in work units: one unit per transaction up to the
//! last checkpoint, [`VERIFICATION_COST_FACTOR`] units per transaction after
//! it, since those need full signature checks. Transactions not yet seen are
//! projected from the elapsed time and the table's daily rate.
//!
//! The estimate is a pure function of the table, the chain entry and the
//! supplied `now`; use [`estimate_progress_at`] with a [`Clock`] to read
//! the time from elsewhere.

use chrono::Utc;
use tracing::trace;
use waymark_core::constants::{SECONDS_PER_DAY, VERIFICATION_COST_FACTOR};
use waymark_core::traits::ChainEntry;

use crate::table::{CheckpointMetadata, CheckpointTable};

/// Source of the current Unix time in seconds.
pub trait Clock {
    fn now(&self) -> u64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        // Clamp pre-epoch readings to 0.
        u64::try_from(Utc::now().timestamp()).unwrap_or(0)
    }
}

/// A clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}

/// Transactions expected over `elapsed_secs` at the table's daily rate.
fn projected_txs(meta: &CheckpointMetadata, elapsed_secs: u64) -> f64 {
    elapsed_secs as f64 / SECONDS_PER_DAY * meta.estimated_tx_per_day
}

/// Fraction of initial sync completed at `node`, in `[0, 1]`.
///
/// Returns 0.0 when there is no chain entry yet or enforcement is off.
/// Time deltas that would be negative (clock behind the block) count as
/// zero.
pub fn estimate_progress<E: ChainEntry>(
    table: &CheckpointTable,
    node: Option<&E>,
    now: u64,
    enabled: bool,
) -> f64 {
    let Some(node) = node else {
        return 0.0;
    };
    if !enabled {
        return 0.0;
    }

    let meta = table.metadata();
    let checkpoint_txs = meta.last_checkpoint_tx_count;
    let chain_txs = node.cumulative_tx_count();

    let (work_before, work_after) = if chain_txs <= checkpoint_txs {
        let cheap_after = (checkpoint_txs - chain_txs) as f64;
        let expensive_after =
            projected_txs(meta, now.saturating_sub(meta.last_checkpoint_timestamp));
        (
            chain_txs as f64,
            cheap_after + expensive_after * VERIFICATION_COST_FACTOR,
        )
    } else {
        let expensive_before = (chain_txs - checkpoint_txs) as f64;
        let expensive_after = projected_txs(meta, now.saturating_sub(node.timestamp()));
        (
            checkpoint_txs as f64 + expensive_before * VERIFICATION_COST_FACTOR,
            expensive_after * VERIFICATION_COST_FACTOR,
        )
    };

    trace!(
        "progress at height {}: work_before={} work_after={}",
        node.height(),
        work_before,
        work_after
    );

    if work_after <= 0.0 {
        return 1.0;
    }
    (work_before / (work_before + work_after)).clamp(0.0, 1.0)
}

/// [`estimate_progress`] with `now` read from `clock`.
pub fn estimate_progress_at<E: ChainEntry, C: Clock + ?Sized>(
    table: &CheckpointTable,
    node: Option<&E>,
    clock: &C,
    enabled: bool,
) -> f64 {
    estimate_progress(table, node, clock.now(), enabled)
}
