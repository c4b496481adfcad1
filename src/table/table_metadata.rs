use crate::error::{TableError, TableResult};
use crate::table::constants::{EMPTY_FPRINT, SLOT_BITS, SLOTS_PER_BLOCK};
use crate::table::slot_mask;

/// Fingerprint region of the table plus its fixed geometry header.
///
/// Holds one byte per slot, `nslots` bytes in total, addressed as
/// `(block_index << SLOT_BITS) + slot`. Rows are kept as `[u8; 32]` so one
/// block is exactly one vector load. A byte of `EMPTY_FPRINT` marks an empty
/// slot.
#[derive(Debug, Clone)]
pub struct TableMetadata {
    /// Bytes occupied by the blocks region.
    total_size_in_bytes: u64,
    nslots: u64,
    nblocks: u64,
    block_bits: u64,
    block_md: Box<[[u8; SLOTS_PER_BLOCK]]>,
}

impl TableMetadata {
    /// Allocates an all-empty fingerprint region for `2^log_slots` slots.
    ///
    /// `log_slots` must already be validated.
    pub(crate) fn allocate(log_slots: u64, total_size_in_bytes: u64) -> TableResult<Self> {
        let block_bits = log_slots - SLOT_BITS;
        let nblocks = 1u64 << block_bits;

        let block_md = allocate_region(nblocks, [EMPTY_FPRINT; SLOTS_PER_BLOCK])?;

        Ok(Self {
            total_size_in_bytes,
            nslots: 1u64 << log_slots,
            nblocks,
            block_bits,
            block_md,
        })
    }

    #[inline]
    pub fn nslots(&self) -> u64 {
        self.nslots
    }

    #[inline]
    pub fn nblocks(&self) -> u64 {
        self.nblocks
    }

    #[inline]
    pub fn block_bits(&self) -> u64 {
        self.block_bits
    }

    #[inline]
    pub fn total_size_in_bytes(&self) -> u64 {
        self.total_size_in_bytes
    }

    /// The whole region as a flat byte slice, in slot order.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.block_md.as_flattened()
    }

    /// The 32 fingerprint bytes of one block.
    #[inline]
    pub fn block_fingerprints(&self, block_index: u64) -> Option<&[u8; SLOTS_PER_BLOCK]> {
        self.block_md.get(block_index as usize)
    }

    /// Bitmask of slots in `block_index` whose fingerprint byte equals
    /// `fingerprint`.
    ///
    /// # Panics
    /// If `block_index >= nblocks`.
    #[inline]
    pub fn slot_mask(&self, fingerprint: u8, block_index: u64) -> u32 {
        slot_mask(&self.block_md[block_index as usize], fingerprint)
    }

    #[inline]
    pub(crate) fn set(&mut self, block_index: u64, slot: usize, fingerprint: u8) {
        self.block_md[block_index as usize][slot] = fingerprint;
    }

    pub(crate) fn clear(&mut self) {
        self.block_md.fill([EMPTY_FPRINT; SLOTS_PER_BLOCK]);
    }
}

/// Allocates `len` copies of `fill`, reporting allocation failure instead of
/// aborting.
pub(crate) fn allocate_region<T: Clone>(len: u64, fill: T) -> TableResult<Box<[T]>> {
    let bytes = len.saturating_mul(size_of::<T>() as u64);
    let failed = || TableError::AllocationFailed { bytes };

    let len = usize::try_from(len).map_err(|_| failed())?;

    let mut region = Vec::new();
    region.try_reserve_exact(len).map_err(|_| failed())?;
    region.resize(len, fill);

    Ok(region.into_boxed_slice())
}
