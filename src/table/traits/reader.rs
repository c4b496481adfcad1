use crate::table::constants::{Key, Value};

pub trait TableReader {
    /// Retrieves the value stored for `key`.
    ///
    /// Probes the key's block for slots carrying its fingerprint and returns
    /// the value of the lowest-ranked one whose tag also matches.
    ///
    /// # Parameters
    /// - `key`: The key to look up.
    ///
    /// # Returns
    /// - `Some(value)`: A slot with this key's fingerprint and tag exists.
    /// - `None`: No such slot.
    ///
    /// # Notes
    /// - Keys are not stored. A different key that shares this key's block
    ///   index, fingerprint and tag is indistinguishable from it, so a hit
    ///   may belong to that other key (a false positive).
    /// - If the same key was inserted more than once, the value in the
    ///   lowest-numbered slot is returned.
    fn lookup(&self, key: Key) -> Option<Value>;

    /// Same as [`Self::lookup`] with a pre-computed key hash, skipping the
    /// hashing step.
    fn lookup_with_key_hash(&self, key_hash: u64) -> Option<Value>;

    /// Returns `true` if [`Self::lookup`] would find a value for `key`.
    fn contains(&self, key: Key) -> bool {
        self.lookup(key).is_some()
    }
}
