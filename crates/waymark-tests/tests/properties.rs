//! Property tests for the checkpoint queries.
//!
//! Inputs are drawn from ranges around the production metadata so the
//! estimator is exercised in both cost regimes.

use proptest::prelude::*;

use waymark_checkpoints::progress::estimate_progress;
use waymark_checkpoints::validator::check_block;
use waymark_checkpoints::{CheckpointMetadata, CheckpointTable};
use waymark_core::types::{ChainNode, Hash256};
use waymark_tests::helpers::*;

fn table_from(heights: &[u64]) -> CheckpointTable {
    heights
        .iter()
        .fold(
            CheckpointTable::builder(CheckpointMetadata {
                last_checkpoint_timestamp: 1_392_233_509,
                last_checkpoint_tx_count: 12_491,
                estimated_tx_per_day: 60_000.0,
            }),
            |b, &height| {
                let mut bytes = [0u8; 32];
                bytes[..8].copy_from_slice(&height.to_le_bytes());
                b.checkpoint(height, Hash256(bytes))
            },
        )
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// check_block
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn disabled_check_always_passes(height in any::<u64>(), bytes in any::<[u8; 32]>()) {
        let p = mainnet();
        prop_assert!(p.check_block(height, &Hash256(bytes), false));
    }

    #[test]
    fn check_rejects_only_at_checkpointed_heights(
        heights in proptest::collection::btree_set(0u64..10_000, 0..40),
        height in 0u64..10_000,
        bytes in any::<[u8; 32]>(),
    ) {
        let heights: Vec<u64> = heights.into_iter().collect();
        let table = table_from(&heights);
        let hash = Hash256(bytes);
        let accepted = check_block(&table, height, &hash, true);
        match table.get(height) {
            None => prop_assert!(accepted),
            Some(expected) => prop_assert_eq!(accepted, *expected == hash),
        }
    }
}

// ---------------------------------------------------------------------------
// last_checkpoint
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn anchor_is_max_indexed_checkpoint(
        present in proptest::collection::vec(any::<bool>(), 40),
    ) {
        let p = mainnet();
        let checkpoints: Vec<_> = p.table().iter().collect();
        let chosen: Vec<u64> = checkpoints
            .iter()
            .zip(&present)
            .filter(|(_, keep)| **keep)
            .map(|(cp, _)| cp.height)
            .collect();
        let index = index_at_checkpoints(&p, &chosen);

        let anchor = p.last_checkpoint(&index, true).map(|n| n.height);
        prop_assert_eq!(anchor, chosen.iter().copied().max());
    }
}

// ---------------------------------------------------------------------------
// estimate_progress
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn progress_in_unit_interval(
        txs in any::<u64>(),
        timestamp in any::<u64>(),
        now in any::<u64>(),
    ) {
        let p = mainnet();
        let n = node(0, Hash256::ZERO, txs, timestamp);
        let progress = p.estimate_progress(Some(&n), now, true);
        prop_assert!((0.0..=1.0).contains(&progress), "progress {}", progress);
    }

    #[test]
    fn progress_non_decreasing_in_tx_count(
        a in 0u64..1_000_000,
        b in 0u64..1_000_000,
        after_checkpoint in 0u64..(5 * 365 * 86_400),
        since_node in 0u64..(365 * 86_400),
    ) {
        let table = table_from(&[0]);
        let meta = *table.metadata();
        // Blocks past the last checkpoint are never older than it.
        let node_time = meta.last_checkpoint_timestamp + after_checkpoint;
        let now = node_time + since_node;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let lo_node = node(0, Hash256::ZERO, lo, node_time);
        let hi_node = node(0, Hash256::ZERO, hi, node_time);
        let p_lo = estimate_progress(&table, Some(&lo_node), now, true);
        let p_hi = estimate_progress(&table, Some(&hi_node), now, true);
        prop_assert!(p_hi >= p_lo - 1e-12, "lo={} -> {}, hi={} -> {}", lo, p_lo, hi, p_hi);
    }

    #[test]
    fn progress_is_idempotent(txs in 0u64..1_000_000, now in any::<u64>()) {
        let p = mainnet();
        let n = node(0, Hash256::ZERO, txs, 1_392_233_509);
        let first = p.estimate_progress(Some(&n), now, true);
        let second = p.estimate_progress(Some(&n), now, true);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }
}

#[test]
fn progress_absent_node_is_zero_for_any_time() {
    let p = mainnet();
    let none: Option<&ChainNode> = None;
    for now in [0, 1, 1_392_233_509, u64::MAX] {
        assert_eq!(p.estimate_progress(none, now, true), 0.0);
    }
}
