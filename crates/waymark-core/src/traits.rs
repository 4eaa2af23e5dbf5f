//! Trait interfaces onto state owned by the block validation engine.
//!
//! - [`ChainEntry`]: read-only view of one block index entry
//! - [`BlockIndex`]: read-only hash-to-entry lookup
//!
//! The checkpoint layer never mutates anything behind these traits and keeps
//! no references past a single call. Callers that share the index with a
//! writer must hold whatever lock makes the view a consistent snapshot.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::types::Hash256;

/// Fields of a block index entry consumed by the checkpoint layer.
pub trait ChainEntry {
    /// Height of the block.
    fn height(&self) -> u64;

    /// Block identifier.
    fn hash(&self) -> Hash256;

    /// Transactions from genesis through this block, inclusive.
    fn cumulative_tx_count(&self) -> u64;

    /// Block timestamp, Unix seconds.
    fn timestamp(&self) -> u64;
}

impl<T: ChainEntry + ?Sized> ChainEntry for &T {
    fn height(&self) -> u64 {
        (**self).height()
    }

    fn hash(&self) -> Hash256 {
        (**self).hash()
    }

    fn cumulative_tx_count(&self) -> u64 {
        (**self).cumulative_tx_count()
    }

    fn timestamp(&self) -> u64 {
        (**self).timestamp()
    }
}

/// Hash-keyed block index.
///
/// Implemented for the standard maps so an engine's own index type can be
/// handed over directly.
pub trait BlockIndex {
    /// The entry type stored in the index.
    type Entry;

    /// Look up an entry by block hash. Returns `None` if not indexed.
    fn get_by_hash(&self, hash: &Hash256) -> Option<&Self::Entry>;

    /// Whether a block with this hash is indexed.
    ///
    /// Default implementation delegates to [`get_by_hash`](Self::get_by_hash).
    fn contains_hash(&self, hash: &Hash256) -> bool {
        self.get_by_hash(hash).is_some()
    }
}

impl<V, S: BuildHasher> BlockIndex for HashMap<Hash256, V, S> {
    type Entry = V;

    fn get_by_hash(&self, hash: &Hash256) -> Option<&V> {
        self.get(hash)
    }
}

impl<V> BlockIndex for BTreeMap<Hash256, V> {
    type Entry = V;

    fn get_by_hash(&self, hash: &Hash256) -> Option<&V> {
        self.get(hash)
    }
}

impl<I: BlockIndex + ?Sized> BlockIndex for &I {
    type Entry = I::Entry;

    fn get_by_hash(&self, hash: &Hash256) -> Option<&Self::Entry> {
        (**self).get_by_hash(hash)
    }
}
