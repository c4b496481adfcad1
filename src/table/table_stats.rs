/// Point-in-time occupancy and footprint summary of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    pub nslots: u64,
    pub nblocks: u64,
    pub block_bits: u64,
    /// Occupied slots.
    pub len: u64,
    /// Blocks with no empty slot left; inserts hashing there fail.
    pub full_blocks: u64,
    /// Blocks with no occupied slot.
    pub empty_blocks: u64,
    /// Occupied slots in the fullest block.
    pub max_block_occupancy: u32,
    pub metadata_bytes: u64,
    pub block_bytes: u64,
}

impl TableStats {
    #[inline]
    pub fn load_factor(&self) -> f64 {
        if self.nslots == 0 {
            return 0.0;
        }
        self.len as f64 / self.nslots as f64
    }

    #[inline]
    pub fn total_bytes(&self) -> u64 {
        self.metadata_bytes + self.block_bytes
    }
}
