use crate::table::constants::{SLOTS_PER_BLOCK, Value};

/// Tags and values for the 32 slots of one block.
///
/// Keys are not stored. Whether a slot is live is decided solely by its
/// fingerprint byte in [`crate::TableMetadata`]; the tag and value of an
/// empty slot are stale and never read.
///
/// # Memory Layout
/// `#[repr(C)]`, 512 bytes: all 32 tags followed by all 32 values, so a tag
/// scan touches contiguous memory.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    tags: [u64; SLOTS_PER_BLOCK],
    values: [Value; SLOTS_PER_BLOCK],
}

impl Default for Block {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Block {
    pub const EMPTY: Self = Self {
        tags: [0; SLOTS_PER_BLOCK],
        values: [0; SLOTS_PER_BLOCK],
    };

    #[inline]
    pub fn tag(&self, slot: usize) -> u64 {
        self.tags[slot]
    }

    #[inline]
    pub fn value(&self, slot: usize) -> Value {
        self.values[slot]
    }

    #[inline]
    pub(crate) fn write(&mut self, slot: usize, tag: u64, value: Value) {
        self.tags[slot] = tag;
        self.values[slot] = value;
    }
}
