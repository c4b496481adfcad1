/// Key type accepted by the table.
pub type Key = u64;

/// Payload stored alongside each occupied slot.
pub type Value = u64;

/// log2 of the number of slots per block.
pub const SLOT_BITS: u64 = 5;

/// Slots per block. One AVX2 register holds exactly one block of fingerprints.
pub const SLOTS_PER_BLOCK: usize = 1 << SLOT_BITS;

/// Hash bits consumed by the per-slot fingerprint.
pub const FPRINT_BITS: u64 = 8;

/// Low-bit mask selecting the fingerprint out of a hash.
pub const FPRINT_MASK: u64 = (1 << FPRINT_BITS) - 1;

/// Metadata byte marking an empty slot.
pub const EMPTY_FPRINT: u8 = 0;

/// Stored in place of a computed fingerprint of `0`, which would otherwise
/// read back as an empty slot.
pub const ZERO_FPRINT_REMAP: u8 = 1;

/// Smallest accepted `log_slots` (a single block).
pub const MIN_LOG_SLOTS: u64 = SLOT_BITS;

/// Largest accepted `log_slots`. Keeps `FPRINT_BITS + block_bits` well below
/// 64 so the tag shift stays in range.
pub const MAX_LOG_SLOTS: u64 = 48;

/// `log_slots` used when nothing else is configured (1 Mi slots).
pub const DEFAULT_LOG_SLOTS: u64 = 20;
