use crate::error::TableResult;
use crate::table::SlotPosition;
use crate::table::constants::{Key, Value};

pub trait TableWriter {
    /// Stores `value` for `key` in the first empty slot of the key's block.
    ///
    /// # Returns
    /// - `true`: The entry was written.
    /// - `false`: The key's block has no empty slot. Nothing was written.
    ///
    /// # Notes
    /// - There is no uniqueness check. Inserting a key twice occupies two
    ///   slots; see [`crate::traits::TableReader::lookup`] for which one a
    ///   lookup observes.
    /// - There is no overflow into neighbouring blocks.
    fn insert(&mut self, key: Key, value: Value) -> bool {
        self.try_insert(key, value).is_ok()
    }

    /// Like [`Self::insert`], but reports where the entry landed.
    ///
    /// # Returns
    /// - `Ok(SlotPosition)`: Block and slot now holding the entry.
    /// - `Err(TableError::CapacityExhausted)`: The block is full. Nothing was
    ///   written.
    fn try_insert(&mut self, key: Key, value: Value) -> TableResult<SlotPosition>;

    /// Insert using a **pre-computed key hash**.
    fn insert_with_key_hash(&mut self, key_hash: u64, value: Value) -> bool {
        self.try_insert_with_key_hash(key_hash, value).is_ok()
    }

    /// `try_insert` using a **pre-computed key hash**.
    fn try_insert_with_key_hash(
        &mut self,
        key_hash: u64,
        value: Value,
    ) -> TableResult<SlotPosition>;

    /// Removes one entry stored for `key` with exactly `value`.
    ///
    /// The value is required because keys are not stored: several slots may
    /// carry this key's fingerprint and tag, and the value picks between
    /// them. Candidates are tried in increasing slot order and only the
    /// first full match is removed.
    ///
    /// # Returns
    /// - `true`: One matching slot was emptied.
    /// - `false`: No slot matched both tag and value.
    fn remove(&mut self, key: Key, value: Value) -> bool;

    /// Remove using a **pre-computed key hash**.
    fn remove_with_key_hash(&mut self, key_hash: u64, value: Value) -> bool;

    /// Marks every slot empty. The geometry is unchanged.
    fn clear(&mut self);
}
