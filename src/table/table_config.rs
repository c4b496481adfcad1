use crate::error::{TableError, TableResult};
use crate::table::constants::{DEFAULT_LOG_SLOTS, MAX_LOG_SLOTS, MIN_LOG_SLOTS, SLOT_BITS};
use crate::table::digest::Xxh3BuildHasher;

/// Construction parameters for [`crate::IcebergTable`].
///
/// The table never changes shape, so everything here is fixed at
/// construction.
///
/// ```
/// use simd_iceberg::TableConfig;
///
/// let config = TableConfig::for_capacity(1000).unwrap();
/// assert_eq!(config.log_slots, 10);
/// assert_eq!(config.nslots(), 1024);
/// assert_eq!(config.nblocks(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// log2 of the total slot count.
    pub log_slots: u64,
    /// Seed for the default XXH3 key hasher.
    pub hash_seed: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            log_slots: DEFAULT_LOG_SLOTS,
            hash_seed: 0,
        }
    }
}

impl TableConfig {
    pub fn new(log_slots: u64) -> Self {
        Self {
            log_slots,
            ..Self::default()
        }
    }

    pub fn with_hash_seed(mut self, hash_seed: u64) -> Self {
        self.hash_seed = hash_seed;
        self
    }

    /// Smallest configuration holding at least `min_slots` slots (rounded up
    /// to a power of two, and to at least one block).
    pub fn for_capacity(min_slots: u64) -> TableResult<Self> {
        let nslots = min_slots.checked_next_power_of_two().ok_or_else(|| {
            TableError::InvalidConfig(format!("capacity {} is too large", min_slots))
        })?;

        let config = Self::new((nslots.trailing_zeros() as u64).max(MIN_LOG_SLOTS));
        config.validate()?;

        Ok(config)
    }

    /// Checks that `log_slots` describes at least one block and leaves room
    /// for the tag.
    pub fn validate(&self) -> TableResult<()> {
        if !(MIN_LOG_SLOTS..=MAX_LOG_SLOTS).contains(&self.log_slots) {
            return Err(TableError::InvalidLogSlots {
                log_slots: self.log_slots,
                min: MIN_LOG_SLOTS,
                max: MAX_LOG_SLOTS,
            });
        }

        Ok(())
    }

    #[inline]
    pub fn nslots(&self) -> u64 {
        1u64.checked_shl(self.log_slots as u32).unwrap_or(0)
    }

    #[inline]
    pub fn block_bits(&self) -> u64 {
        self.log_slots.saturating_sub(SLOT_BITS)
    }

    #[inline]
    pub fn nblocks(&self) -> u64 {
        1u64.checked_shl(self.block_bits() as u32).unwrap_or(0)
    }

    /// The key hasher this configuration builds tables with.
    pub fn hasher(&self) -> Xxh3BuildHasher {
        Xxh3BuildHasher::with_seed(self.hash_seed)
    }
}
