//! End-to-end checks against the production checkpoint profile.
//!
//! Each test resolves the mainnet profile the way a node would at startup
//! and exercises the four queries through it.

use std::collections::HashMap;

use waymark_checkpoints::progress::estimate_progress_at;
use waymark_checkpoints::{CheckpointMetadata, CheckpointTable, FixedClock, NetworkProfile};
use waymark_core::constants::NetworkType;
use waymark_core::types::{ChainNode, Hash256};
use waymark_tests::helpers::*;

// ---------------------------------------------------------------------------
// check_block
// ---------------------------------------------------------------------------

#[test]
fn every_checkpoint_accepts_its_hash_and_rejects_others() {
    init_tracing();
    let p = mainnet();
    for cp in p.table().iter() {
        assert!(p.check_block(cp.height, &cp.hash, true), "height {}", cp.height);
        assert!(!p.check_block(cp.height, &foreign_hash(1), true), "height {}", cp.height);
    }
}

#[test]
fn non_checkpoint_heights_are_unconstrained() {
    let p = mainnet();
    for height in [1, 4, 7, 9, 24, 27, 59_999, 60_001, u64::MAX] {
        assert!(p.table().get(height).is_none());
        assert!(p.check_block(height, &foreign_hash(2), true), "height {height}");
    }
}

#[test]
fn disabled_enforcement_accepts_everything() {
    let p = mainnet();
    for height in [0, 2, 3, 60_000, 12] {
        assert!(p.check_block(height, &foreign_hash(3), false));
    }
}

// ---------------------------------------------------------------------------
// last_checkpoint
// ---------------------------------------------------------------------------

#[test]
fn anchor_is_highest_checkpoint_in_index() {
    let p = mainnet();
    let index = index_at_checkpoints(&p, &[0, 2, 8]);
    let anchor = p.last_checkpoint(&index, true).unwrap();
    assert_eq!(anchor.height, 8);
}

#[test]
fn anchor_skips_gaps_in_the_index() {
    let p = mainnet();
    let mut index = index_at_checkpoints(&p, &[0, 853, 31_950]);
    index.insert(foreign_hash(9), node(70_000, foreign_hash(9), 0, 0));
    assert_eq!(p.last_checkpoint(&index, true).map(|n| n.height), Some(31_950));
}

#[test]
fn anchor_absent_without_checkpoint_blocks() {
    let p = mainnet();
    let index: HashMap<Hash256, ChainNode> = (0..50u8)
        .map(|i| (foreign_hash(i), node(i as u64, foreign_hash(i), 0, 0)))
        .collect();
    assert!(p.last_checkpoint(&index, true).is_none());
}

#[test]
fn anchor_absent_when_disabled() {
    let p = mainnet();
    let index = index_at_checkpoints(&p, &[0, 60_000]);
    assert!(p.last_checkpoint(&index, false).is_none());
}

#[test]
fn anchor_works_over_borrowed_entries() {
    let p = mainnet();
    let owned = index_at_checkpoints(&p, &[0, 25]);
    let borrowed: HashMap<Hash256, &ChainNode> = owned.iter().map(|(k, v)| (*k, v)).collect();
    assert_eq!(p.last_checkpoint(&borrowed, true).map(|n| n.height), Some(25));
}

// ---------------------------------------------------------------------------
// estimate_progress
// ---------------------------------------------------------------------------

#[test]
fn progress_complete_at_last_checkpoint() {
    let p = mainnet();
    let meta = *p.table().metadata();
    let tip = node(
        60_000,
        *p.table().get(60_000).unwrap(),
        meta.last_checkpoint_tx_count,
        meta.last_checkpoint_timestamp,
    );
    assert_eq!(p.estimate_progress(Some(&tip), meta.last_checkpoint_timestamp, true), 1.0);
}

#[test]
fn progress_zero_without_chain() {
    let p = mainnet();
    assert_eq!(p.estimate_progress::<ChainNode>(None, 0, true), 0.0);
    assert_eq!(p.estimate_progress::<ChainNode>(None, u64::MAX, true), 0.0);
}

#[test]
fn progress_halfway_through_checkpointed_history() {
    let p = mainnet();
    let meta = *p.table().metadata();
    let half = meta.last_checkpoint_tx_count / 2;
    let n = node(30_000, foreign_hash(4), half, 0);
    let progress = p.estimate_progress(Some(&n), meta.last_checkpoint_timestamp, true);
    let expected = half as f64 / meta.last_checkpoint_tx_count as f64;
    assert!((progress - expected).abs() < 1e-12, "got {progress}");
}

#[test]
fn progress_drops_as_time_passes_without_new_blocks() {
    let p = mainnet();
    let meta = *p.table().metadata();
    let n = node(30_000, foreign_hash(5), 6_000, 0);
    let early = p.estimate_progress(Some(&n), meta.last_checkpoint_timestamp, true);
    let later = p.estimate_progress(Some(&n), meta.last_checkpoint_timestamp + 86_400, true);
    assert!(later < early);
}

#[test]
fn progress_through_clock_matches_explicit_time() {
    let p = mainnet();
    let n = node(40_000, foreign_hash(6), 10_000, 0);
    let clock = FixedClock(1_400_000_000);
    assert_eq!(
        estimate_progress_at(p.table(), Some(&n), &clock, true),
        p.estimate_progress(Some(&n), 1_400_000_000, true)
    );
}

// ---------------------------------------------------------------------------
// highest_checkpoint_height
// ---------------------------------------------------------------------------

#[test]
fn highest_checkpoint_height_of_production_table() {
    let p = mainnet();
    assert_eq!(p.highest_checkpoint_height(true), 60_000);
    assert_eq!(p.highest_checkpoint_height(false), 0);
}

#[test]
fn highest_checkpoint_height_of_empty_table() {
    let table = CheckpointTable::builder(CheckpointMetadata {
        last_checkpoint_timestamp: 0,
        last_checkpoint_tx_count: 0,
        estimated_tx_per_day: 0.0,
    })
    .build()
    .unwrap();
    let p = NetworkProfile::from_table(NetworkType::Testnet, table);
    assert_eq!(p.highest_checkpoint_height(true), 0);
}

// ---------------------------------------------------------------------------
// idempotence
// ---------------------------------------------------------------------------

#[test]
fn repeated_queries_are_identical() {
    let p = mainnet();
    let index = index_at_checkpoints(&p, &[0, 2, 8, 26]);
    let n = node(26, foreign_hash(7), 500, 1_390_000_000);

    for _ in 0..3 {
        assert!(p.check_block(26, p.table().get(26).unwrap(), true));
        assert_eq!(p.last_checkpoint(&index, true).map(|n| n.height), Some(26));
        assert_eq!(
            p.estimate_progress(Some(&n), 1_392_233_509, true),
            p.estimate_progress(Some(&n), 1_392_233_509, true)
        );
        assert_eq!(p.highest_checkpoint_height(true), 60_000);
    }
    assert_eq!(p, mainnet());
}
