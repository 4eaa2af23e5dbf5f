//! Checkpoint table representation and construction.
//!
//! A [`CheckpointTable`] is a height-ordered set of trusted block hashes plus
//! the [`CheckpointMetadata`] describing the chain at its last entry. Tables
//! are validated once, when built, and are immutable afterwards: every query
//! is a plain read.
//!
//! # Data defects
//!
//! Hand-maintained checkpoint lists occasionally repeat a height. The
//! builder never fixes such data silently; [`DuplicatePolicy`] decides
//! whether a repeat is fatal or whether the later entry wins, and in the
//! latter case the height is logged and recorded in
//! [`CheckpointTable::shadowed_heights`] so it can be checked against the
//! authoritative chain.

use std::collections::btree_map::{self, BTreeMap, Entry};
use std::collections::HashMap;
use std::iter::Rev;

use serde::{Deserialize, Serialize};
use tracing::warn;
use waymark_core::error::CheckpointError;
use waymark_core::types::{Checkpoint, Hash256};

/// Chain statistics at the last checkpoint, used by progress estimation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CheckpointMetadata {
    /// Unix timestamp of the last checkpoint block.
    pub last_checkpoint_timestamp: u64,
    /// Transactions between genesis and the last checkpoint, inclusive.
    pub last_checkpoint_tx_count: u64,
    /// Estimated transactions per day after the last checkpoint.
    pub estimated_tx_per_day: f64,
}

impl CheckpointMetadata {
    fn validate(&self) -> Result<(), CheckpointError> {
        if !self.estimated_tx_per_day.is_finite() || self.estimated_tx_per_day < 0.0 {
            return Err(CheckpointError::InvalidMetadata(format!(
                "estimated_tx_per_day must be finite and non-negative, got {}",
                self.estimated_tx_per_day
            )));
        }
        Ok(())
    }
}

/// What to do when the same height is added twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail construction with [`CheckpointError::DuplicateHeight`].
    #[default]
    Reject,
    /// Keep the later entry and record the height as shadowed.
    LastWriteWins,
}

/// Immutable height-to-hash checkpoint set with its metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointTable {
    checkpoints: BTreeMap<u64, Hash256>,
    metadata: CheckpointMetadata,
    shadowed: Vec<u64>,
}

impl CheckpointTable {
    /// Start building a table with the given metadata.
    pub fn builder(metadata: CheckpointMetadata) -> CheckpointTableBuilder {
        CheckpointTableBuilder {
            entries: Vec::new(),
            metadata,
            policy: DuplicatePolicy::default(),
        }
    }

    /// Hash pinned at `height`, if any.
    pub fn get(&self, height: u64) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    /// Number of distinct checkpointed heights.
    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Whether the table has no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// Highest checkpointed height, or `None` for an empty table.
    pub fn highest_height(&self) -> Option<u64> {
        self.checkpoints.last_key_value().map(|(h, _)| *h)
    }

    pub fn metadata(&self) -> &CheckpointMetadata {
        &self.metadata
    }

    /// Heights that appeared more than once while building under
    /// [`DuplicatePolicy::LastWriteWins`], ascending.
    pub fn shadowed_heights(&self) -> &[u64] {
        &self.shadowed
    }

    /// Checkpoints in ascending height order.
    pub fn iter(&self) -> Checkpoints<'_> {
        Checkpoints { inner: self.checkpoints.iter() }
    }

    /// Checkpoints in strictly descending height order.
    ///
    /// Lazy and restartable: each call yields a fresh iterator over the
    /// same immutable data.
    pub fn checkpoints_descending(&self) -> Rev<Checkpoints<'_>> {
        self.iter().rev()
    }
}

impl<'a> IntoIterator for &'a CheckpointTable {
    type Item = Checkpoint;
    type IntoIter = Checkpoints<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the checkpoints of a [`CheckpointTable`].
#[derive(Debug, Clone)]
pub struct Checkpoints<'a> {
    inner: btree_map::Iter<'a, u64, Hash256>,
}

impl Iterator for Checkpoints<'_> {
    type Item = Checkpoint;

    fn next(&mut self) -> Option<Checkpoint> {
        self.inner
            .next()
            .map(|(height, hash)| Checkpoint { height: *height, hash: *hash })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Checkpoints<'_> {
    fn next_back(&mut self) -> Option<Checkpoint> {
        self.inner
            .next_back()
            .map(|(height, hash)| Checkpoint { height: *height, hash: *hash })
    }
}

impl ExactSizeIterator for Checkpoints<'_> {}

/// Collects checkpoint entries and validates them in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct CheckpointTableBuilder {
    entries: Vec<(u64, Hash256)>,
    metadata: CheckpointMetadata,
    policy: DuplicatePolicy,
}

impl CheckpointTableBuilder {
    /// Set the duplicate-height policy. Defaults to [`DuplicatePolicy::Reject`].
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add a checkpoint.
    pub fn checkpoint(mut self, height: u64, hash: Hash256) -> Self {
        self.entries.push((height, hash));
        self
    }

    /// Add a checkpoint from its hex form (`0x` prefix optional).
    ///
    /// # Errors
    ///
    /// Returns [`CheckpointError::InvalidHash`] if `hex` is not exactly 32
    /// bytes of hex.
    pub fn checkpoint_hex(self, height: u64, hex: &str) -> Result<Self, CheckpointError> {
        let hash = Hash256::from_hex(hex)
            .map_err(|source| CheckpointError::InvalidHash { height, source })?;
        Ok(self.checkpoint(height, hash))
    }

    /// Add several hex checkpoints in order.
    pub fn checkpoints_hex(self, entries: &[(u64, &str)]) -> Result<Self, CheckpointError> {
        entries
            .iter()
            .try_fold(self, |builder, (height, hex)| builder.checkpoint_hex(*height, hex))
    }

    /// Validate the collected entries and produce the table.
    ///
    /// # Errors
    ///
    /// - [`CheckpointError::DuplicateHeight`] for a repeated height under
    ///   [`DuplicatePolicy::Reject`].
    /// - [`CheckpointError::HashAtTwoHeights`] when one hash is pinned at two
    ///   different heights, regardless of policy.
    /// - [`CheckpointError::InvalidMetadata`] for a negative or non-finite
    ///   transaction rate.
    pub fn build(self) -> Result<CheckpointTable, CheckpointError> {
        self.metadata.validate()?;

        let mut checkpoints: BTreeMap<u64, Hash256> = BTreeMap::new();
        let mut heights_by_hash: HashMap<Hash256, u64> = HashMap::new();
        let mut shadowed = Vec::new();

        for (height, hash) in self.entries {
            if let Some(&other) = heights_by_hash.get(&hash) {
                if other != height {
                    return Err(CheckpointError::HashAtTwoHeights {
                        hash: hash.to_string(),
                        first: other,
                        second: height,
                    });
                }
            }

            match checkpoints.entry(height) {
                Entry::Vacant(slot) => {
                    slot.insert(hash);
                }
                Entry::Occupied(mut slot) => {
                    if self.policy == DuplicatePolicy::Reject {
                        return Err(CheckpointError::DuplicateHeight(height));
                    }
                    let previous = slot.insert(hash);
                    if previous != hash {
                        heights_by_hash.remove(&previous);
                    }
                    warn!(
                        "checkpoint height {} listed more than once (previous {}, kept {})",
                        height, previous, hash
                    );
                    shadowed.push(height);
                }
            }
            heights_by_hash.insert(hash, height);
        }

        shadowed.sort_unstable();
        shadowed.dedup();

        Ok(CheckpointTable {
            checkpoints,
            metadata: self.metadata,
            shadowed,
        })
    }
}
