use crate::error::{TableError, TableResult};
use crate::table::constants::*;
use crate::table::digest::{KeyHasher, Xxh3BuildHasher};
use crate::table::table_metadata::allocate_region;
use crate::table::traits::{TableReader, TableWriter};
use crate::table::{Block, HashPartition, TableConfig, TableMetadata, TableStats, word_select};
use std::fmt;
use tracing::{debug, trace};

/// Where an inserted entry was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotPosition {
    pub block_index: u64,
    /// Slot offset within the block, `0..SLOTS_PER_BLOCK`.
    pub slot: usize,
}

impl SlotPosition {
    /// Index of this slot in the flat metadata region.
    #[inline]
    pub fn global_slot(&self) -> u64 {
        (self.block_index << SLOT_BITS) + self.slot as u64
    }
}

/// Fixed-capacity fingerprint hash table.
///
/// `2^log_slots` slots split into blocks of 32. A key's hash picks one block;
/// the key can only ever live in that block, and an insert into a full block
/// fails rather than spilling over.
///
/// # Layout
/// - [`TableMetadata`]: one fingerprint byte per slot (`0` = empty).
/// - `blocks`: one [`Block`] of 32 tags and 32 values per block.
///
/// # Concurrency
/// No internal synchronization. Mutation takes `&mut self`; wrap the table in
/// a `Mutex` or `RwLock` to share it between threads.
#[derive(Clone)]
pub struct IcebergTable<S = Xxh3BuildHasher> {
    metadata: TableMetadata,
    blocks: Box<[Block]>,
    hasher: S,
    len: usize,
}

impl IcebergTable<Xxh3BuildHasher> {
    /// Creates an empty table of `2^log_slots` slots using unseeded XXH3.
    ///
    /// # Errors
    /// - `TableError::InvalidLogSlots` if `log_slots` is outside
    ///   `MIN_LOG_SLOTS..=MAX_LOG_SLOTS`.
    /// - `TableError::AllocationFailed` if either region cannot be allocated.
    pub fn new(log_slots: u64) -> TableResult<Self> {
        Self::with_hasher(log_slots, Xxh3BuildHasher::default())
    }

    /// Creates an empty table from a [`TableConfig`].
    pub fn from_config(config: &TableConfig) -> TableResult<Self> {
        Self::with_hasher(config.log_slots, config.hasher())
    }
}

impl<S: KeyHasher> IcebergTable<S> {
    /// Creates an empty table hashing keys with `hasher`.
    pub fn with_hasher(log_slots: u64, hasher: S) -> TableResult<Self> {
        let config = TableConfig::new(log_slots);
        config.validate()?;

        let nblocks = config.nblocks();
        let total_size_in_bytes = nblocks.saturating_mul(size_of::<Block>() as u64);

        let blocks = allocate_region(nblocks, Block::EMPTY)?;
        let metadata = TableMetadata::allocate(log_slots, total_size_in_bytes)?;

        debug!(
            log_slots,
            nslots = metadata.nslots(),
            nblocks,
            block_bytes = total_size_in_bytes,
            metadata_bytes = metadata.nslots(),
            "Allocated iceberg table"
        );

        Ok(Self {
            metadata,
            blocks,
            hasher,
            len: 0,
        })
    }

    /// Splits `key`'s hash into fingerprint, block index and tag.
    #[inline]
    pub fn hash_partition(&self, key: Key) -> HashPartition {
        self.partition(self.hasher.hash_key(key))
    }

    /// Occupied slots in `block_index`.
    ///
    /// # Panics
    /// If `block_index >= block_count()`.
    #[inline]
    pub fn block_occupancy(&self, block_index: u64) -> usize {
        let empty = self.metadata.slot_mask(EMPTY_FPRINT, block_index);
        SLOTS_PER_BLOCK - empty.count_ones() as usize
    }

    /// Walks a full scan of the metadata region.
    pub fn stats(&self) -> TableStats {
        let mut full_blocks = 0;
        let mut empty_blocks = 0;
        let mut max_block_occupancy = 0;

        for block_index in 0..self.metadata.nblocks() {
            let occupied = self.block_occupancy(block_index) as u32;

            if occupied as usize == SLOTS_PER_BLOCK {
                full_blocks += 1;
            } else if occupied == 0 {
                empty_blocks += 1;
            }
            max_block_occupancy = max_block_occupancy.max(occupied);
        }

        TableStats {
            nslots: self.metadata.nslots(),
            nblocks: self.metadata.nblocks(),
            block_bits: self.metadata.block_bits(),
            len: self.len as u64,
            full_blocks,
            empty_blocks,
            max_block_occupancy,
            metadata_bytes: self.metadata.nslots(),
            block_bytes: self.metadata.total_size_in_bytes(),
        }
    }

    #[inline]
    fn partition(&self, key_hash: u64) -> HashPartition {
        HashPartition::from_hash(key_hash, self.metadata.block_bits())
    }

    /// Lowest-ranked slot in the partition's block whose fingerprint and tag
    /// match, and whose value matches too when one is given.
    #[inline]
    fn find_slot(&self, part: &HashPartition, value: Option<Value>) -> Option<usize> {
        let block = &self.blocks[part.block_index as usize];
        let candidates = self.metadata.slot_mask(part.fingerprint, part.block_index);

        (0..candidates.count_ones())
            .map(|rank| word_select(candidates, rank) as usize)
            .find(|&slot| {
                block.tag(slot) == part.tag && value.is_none_or(|value| block.value(slot) == value)
            })
    }
}

impl<S> IcebergTable<S> {
    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slot count, `2^log_slots`.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.metadata.nslots()
    }

    #[inline]
    pub fn log_slots(&self) -> u64 {
        self.metadata.block_bits() + SLOT_BITS
    }

    #[inline]
    pub fn block_bits(&self) -> u64 {
        self.metadata.block_bits()
    }

    #[inline]
    pub fn block_count(&self) -> u64 {
        self.metadata.nblocks()
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    #[inline]
    pub fn metadata(&self) -> &TableMetadata {
        &self.metadata
    }

    #[inline]
    pub fn block(&self, block_index: u64) -> Option<&Block> {
        self.blocks.get(block_index as usize)
    }
}

impl<S: KeyHasher> TableReader for IcebergTable<S> {
    #[inline]
    fn lookup(&self, key: Key) -> Option<Value> {
        self.lookup_with_key_hash(self.hasher.hash_key(key))
    }

    fn lookup_with_key_hash(&self, key_hash: u64) -> Option<Value> {
        let part = self.partition(key_hash);

        self.find_slot(&part, None)
            .map(|slot| self.blocks[part.block_index as usize].value(slot))
    }
}

impl<S: KeyHasher> TableWriter for IcebergTable<S> {
    #[inline]
    fn try_insert(&mut self, key: Key, value: Value) -> TableResult<SlotPosition> {
        self.try_insert_with_key_hash(self.hasher.hash_key(key), value)
    }

    fn try_insert_with_key_hash(
        &mut self,
        key_hash: u64,
        value: Value,
    ) -> TableResult<SlotPosition> {
        let part = self.partition(key_hash);
        let empty = self.metadata.slot_mask(EMPTY_FPRINT, part.block_index);

        if empty == 0 {
            trace!(block_index = part.block_index, "Insert rejected, block is full");
            return Err(TableError::CapacityExhausted {
                block_index: part.block_index,
            });
        }

        let slot = word_select(empty, 0) as usize;

        self.metadata.set(part.block_index, slot, part.fingerprint);
        self.blocks[part.block_index as usize].write(slot, part.tag, value);
        self.len += 1;

        Ok(SlotPosition {
            block_index: part.block_index,
            slot,
        })
    }

    #[inline]
    fn remove(&mut self, key: Key, value: Value) -> bool {
        self.remove_with_key_hash(self.hasher.hash_key(key), value)
    }

    fn remove_with_key_hash(&mut self, key_hash: u64, value: Value) -> bool {
        let part = self.partition(key_hash);

        match self.find_slot(&part, Some(value)) {
            Some(slot) => {
                // Tag and value stay behind; an empty fingerprint makes them inert.
                self.metadata.set(part.block_index, slot, EMPTY_FPRINT);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.metadata.clear();
        self.len = 0;

        debug!(nslots = self.metadata.nslots(), "Cleared iceberg table");
    }
}

impl<S> fmt::Debug for IcebergTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IcebergTable")
            .field("nslots", &self.metadata.nslots())
            .field("nblocks", &self.metadata.nblocks())
            .field("block_bits", &self.metadata.block_bits())
            .field("len", &self.len)
            .finish()
    }
}
