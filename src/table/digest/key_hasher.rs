use crate::table::constants::Key;
use std::hash::BuildHasher;

/// Maps a key to the single 64-bit hash every table operation partitions.
///
/// The hash must be deterministic for the lifetime of a table and should
/// avalanche well: the low byte becomes the fingerprint and the next bits
/// pick the block, so a weak hash piles keys into few blocks.
///
/// Implemented for every [`BuildHasher`], so `Xxh3BuildHasher`,
/// `std::hash::RandomState` or any third-party hasher plug in directly.
pub trait KeyHasher {
    fn hash_key(&self, key: Key) -> u64;
}

impl<S: BuildHasher> KeyHasher for S {
    #[inline]
    fn hash_key(&self, key: Key) -> u64 {
        self.hash_one(key)
    }
}
