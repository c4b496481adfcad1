use crate::table::constants::{EMPTY_FPRINT, FPRINT_BITS, FPRINT_MASK, ZERO_FPRINT_REMAP};

/// The three disjoint fields one 64-bit hash is split into, lowest bits
/// first: `[ tag | block_index | fingerprint ]`.
///
/// ```
/// use simd_iceberg::HashPartition;
///
/// // 5 block bits: fingerprint 0xCD, block 0b10110, tag 0x2A.
/// let hash = (0x2A << (8 + 5)) | (0b10110 << 8) | 0xCD;
/// let part = HashPartition::from_hash(hash, 5);
///
/// assert_eq!(part.fingerprint, 0xCD);
/// assert_eq!(part.block_index, 0b10110);
/// assert_eq!(part.tag, 0x2A);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashPartition {
    /// Low `FPRINT_BITS` of the hash, never `EMPTY_FPRINT`.
    pub fingerprint: u8,
    /// Next `block_bits` of the hash.
    pub block_index: u64,
    /// Every remaining high bit.
    pub tag: u64,
}

impl HashPartition {
    /// Splits `hash` for a table with `block_bits` block-index bits.
    ///
    /// A computed fingerprint of `0` collides with the empty marker, so it is
    /// stored as `ZERO_FPRINT_REMAP` instead. Such keys share their
    /// fingerprint class with keys whose fingerprint really is `1`; the tag
    /// still tells them apart.
    #[inline]
    pub fn from_hash(hash: u64, block_bits: u64) -> Self {
        let raw_fprint = (hash & FPRINT_MASK) as u8;
        let fingerprint = if raw_fprint == EMPTY_FPRINT {
            ZERO_FPRINT_REMAP
        } else {
            raw_fprint
        };

        let block_mask = (1u64 << block_bits) - 1;
        let block_index = (hash >> FPRINT_BITS) & block_mask;
        let tag = hash
            .checked_shr((FPRINT_BITS + block_bits) as u32)
            .unwrap_or(0);

        Self {
            fingerprint,
            block_index,
            tag,
        }
    }
}
