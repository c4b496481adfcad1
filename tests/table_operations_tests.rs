#[cfg(test)]
mod tests {
    use simd_iceberg::{
        EMPTY_FPRINT, FPRINT_BITS, IcebergTable, SLOTS_PER_BLOCK, ZERO_FPRINT_REMAP,
        traits::{TableReader, TableWriter},
    };
    use std::hash::{BuildHasher, Hasher};

    /// Hashes a key to itself, so tests can place keys precisely.
    #[derive(Debug, Default, Clone, Copy)]
    struct IdentityBuildHasher;

    #[derive(Default)]
    struct IdentityHasher(u64);

    impl Hasher for IdentityHasher {
        fn write(&mut self, bytes: &[u8]) {
            for &byte in bytes {
                self.0 = (self.0 << 8) | byte as u64;
            }
        }

        fn write_u64(&mut self, n: u64) {
            self.0 = n;
        }

        fn finish(&self) -> u64 {
            self.0
        }
    }

    impl BuildHasher for IdentityBuildHasher {
        type Hasher = IdentityHasher;

        fn build_hasher(&self) -> Self::Hasher {
            IdentityHasher::default()
        }
    }

    const LOG_SLOTS: u64 = 10;
    const BLOCK_BITS: u64 = 5;

    /// Key whose (identity) hash splits into exactly these fields.
    fn key_for(tag: u64, block_index: u64, fingerprint: u8) -> u64 {
        (tag << (FPRINT_BITS + BLOCK_BITS)) | (block_index << FPRINT_BITS) | fingerprint as u64
    }

    fn identity_table() -> IcebergTable<IdentityBuildHasher> {
        IcebergTable::with_hasher(LOG_SLOTS, IdentityBuildHasher).expect("Failed to create table")
    }

    fn occupied_bytes<S>(table: &IcebergTable<S>) -> usize {
        table
            .metadata()
            .as_bytes()
            .iter()
            .filter(|&&byte| byte != EMPTY_FPRINT)
            .count()
    }

    #[test]
    fn test_geometry_for_log_slots_10() {
        let table = identity_table();

        assert_eq!(table.capacity(), 1024);
        assert_eq!(table.block_count(), 32);
        assert_eq!(table.block_bits(), BLOCK_BITS);
        assert_eq!(table.log_slots(), LOG_SLOTS);
        assert_eq!(table.metadata().as_bytes().len(), 1024);
        assert!(table.metadata().as_bytes().iter().all(|&b| b == EMPTY_FPRINT));
        assert_eq!(
            table.capacity(),
            table.block_count() * SLOTS_PER_BLOCK as u64,
            "nslots == nblocks * slots_per_block"
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_insert_then_lookup() {
        let mut table = IcebergTable::new(LOG_SLOTS).expect("Failed to create table");

        assert!(table.insert(12345, 100));
        assert_eq!(table.lookup(12345), Some(100));
        assert!(table.contains(12345));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_lookup_missing_key() {
        let mut table = IcebergTable::new(LOG_SLOTS).expect("Failed to create table");
        assert_eq!(table.lookup(1), None);

        table.insert(1, 10);
        assert_eq!(table.lookup(2), None);
        assert!(!table.contains(2));
    }

    #[test]
    fn test_insert_remove_lookup() {
        let mut table = IcebergTable::new(LOG_SLOTS).expect("Failed to create table");

        assert!(table.insert(77, 700));
        assert!(table.remove(77, 700));
        assert_eq!(table.lookup(77), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_remove_requires_matching_value() {
        let mut table = IcebergTable::new(LOG_SLOTS).expect("Failed to create table");

        table.insert(5, 50);
        assert!(!table.remove(5, 51), "wrong value must not remove");
        assert_eq!(table.lookup(5), Some(50));

        assert!(!table.remove(6, 50), "absent key must not remove");
        assert!(table.remove(5, 50));
        assert!(!table.remove(5, 50), "second remove finds nothing");
    }

    #[test]
    fn test_same_block_and_fingerprint_different_tags_coexist() {
        let mut table = identity_table();

        let k1 = key_for(1, 3, 0x42);
        let k2 = key_for(2, 3, 0x42);

        assert_eq!(table.hash_partition(k1).block_index, table.hash_partition(k2).block_index);
        assert_eq!(table.hash_partition(k1).fingerprint, table.hash_partition(k2).fingerprint);
        assert_ne!(table.hash_partition(k1).tag, table.hash_partition(k2).tag);

        assert!(table.insert(k1, 100));
        assert_eq!(table.lookup(k1), Some(100));

        assert!(table.insert(k2, 200));
        assert_eq!(table.lookup(k2), Some(200));
        assert_eq!(table.lookup(k1), Some(100));

        assert!(table.remove(k1, 100));
        assert_eq!(table.lookup(k1), None);
        assert_eq!(table.lookup(k2), Some(200));
        assert_eq!(table.block_occupancy(3), 1);
    }

    #[test]
    fn test_candidates_are_scanned_past_tag_mismatches() {
        let mut table = identity_table();

        // Ten entries share block and fingerprint; only the last one carries
        // the tag we look for.
        for tag in 0..10 {
            assert!(table.insert(key_for(tag, 9, 0xEE), tag * 10));
        }

        assert_eq!(table.lookup(key_for(9, 9, 0xEE)), Some(90));
        assert!(table.remove(key_for(9, 9, 0xEE), 90));
        assert_eq!(table.lookup(key_for(9, 9, 0xEE)), None);
        assert_eq!(table.lookup(key_for(8, 9, 0xEE)), Some(80));
    }

    #[test]
    fn test_duplicate_inserts_occupy_separate_slots() {
        let mut table = identity_table();
        let key = key_for(7, 4, 0x10);

        let first = table.try_insert(key, 10).expect("block has room");
        let second = table.try_insert(key, 20).expect("block has room");

        assert_ne!(first, second);
        assert!(first.slot < second.slot);
        assert_eq!(table.len(), 2);

        // Lowest-ranked slot wins.
        assert_eq!(table.lookup(key), Some(10));

        assert!(table.remove(key, 10));
        assert_eq!(table.lookup(key), Some(20));
        assert!(table.remove(key, 20));
        assert_eq!(table.lookup(key), None);
    }

    #[test]
    fn test_identical_duplicates_are_removed_one_at_a_time() {
        let mut table = identity_table();
        let key = key_for(3, 0, 0x99);

        table.insert(key, 5);
        table.insert(key, 5);

        assert!(table.remove(key, 5));
        assert_eq!(table.lookup(key), Some(5));
        assert!(table.remove(key, 5));
        assert_eq!(table.lookup(key), None);
    }

    #[test]
    fn test_insert_reuses_lowest_freed_slot() {
        let mut table = identity_table();

        let positions: Vec<_> = (0..4)
            .map(|tag| table.try_insert(key_for(tag, 2, 0x21), tag).expect("room"))
            .collect();
        assert_eq!(positions.iter().map(|p| p.slot).collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        assert!(table.remove(key_for(1, 2, 0x21), 1));
        let reused = table.try_insert(key_for(9, 2, 0x21), 9).expect("room");
        assert_eq!(reused.slot, 1);
        assert_eq!(reused.global_slot(), (2 << 5) + 1);
    }

    #[test]
    fn test_false_positive_on_identical_triple_is_part_of_contract() {
        let mut table = identity_table();

        // Both keys hash to the same block, fingerprint and tag. The table
        // cannot tell them apart.
        let stored = key_for(11, 6, 0x55);
        let stranger = stored;

        table.insert(stored, 1234);
        assert_eq!(table.lookup(stranger), Some(1234));
    }

    #[test]
    fn test_zero_fingerprint_is_stored_as_remap_value() {
        let mut table = identity_table();
        let key = key_for(5, 1, 0x00);

        let position = table.try_insert(key, 4242).expect("room");

        let stored = table.metadata().as_bytes()[position.global_slot() as usize];
        assert_eq!(stored, ZERO_FPRINT_REMAP, "fingerprint 0 is remapped before storage");
        assert_eq!(table.block_occupancy(1), 1, "the entry is not mistaken for an empty slot");
        assert_eq!(table.metadata().slot_mask(EMPTY_FPRINT, 1).count_ones(), 31);

        assert_eq!(table.lookup(key), Some(4242));
        assert!(table.remove(key, 4242));
        assert_eq!(table.lookup(key), None);
    }

    #[test]
    fn test_zero_and_one_fingerprints_share_a_class() {
        let mut table = identity_table();

        let zero_fp = key_for(8, 2, 0x00);
        let one_fp = key_for(8, 2, 0x01);
        let one_fp_other_tag = key_for(9, 2, 0x01);

        table.insert(zero_fp, 1);

        // Same block and tag, and both fingerprints store as 1.
        assert_eq!(table.lookup(one_fp), Some(1));
        // The tag still separates keys in the shared class.
        assert_eq!(table.lookup(one_fp_other_tag), None);
    }

    #[test]
    fn test_key_hash_entry_points_match_keyed_ones() {
        let mut table = identity_table();
        let key = key_for(21, 17, 0x3C);

        assert!(table.insert_with_key_hash(key, 9));
        assert_eq!(table.lookup(key), Some(9));
        assert_eq!(table.lookup_with_key_hash(key), Some(9));
        assert!(table.remove_with_key_hash(key, 9));
        assert_eq!(table.lookup(key), None);
    }

    #[test]
    fn test_many_keys_with_xxh3() {
        let mut table = IcebergTable::new(14).expect("Failed to create table");
        let n = table.capacity() / 4;

        let mut inserted = Vec::new();
        for key in 0..n {
            if table.insert(key, key * 3 + 1) {
                inserted.push(key);
            }
        }

        // At 25% load no block of 32 is expected to overflow.
        assert_eq!(inserted.len() as u64, n);
        assert_eq!(table.len(), inserted.len());
        assert_eq!(occupied_bytes(&table), table.len());

        for &key in &inserted {
            assert_eq!(table.lookup(key), Some(key * 3 + 1), "key {key}");
        }

        for &key in inserted.iter().filter(|&&k| k % 2 == 0) {
            assert!(table.remove(key, key * 3 + 1), "key {key}");
        }

        for &key in &inserted {
            let expected = (key % 2 == 1).then_some(key * 3 + 1);
            assert_eq!(table.lookup(key), expected, "key {key}");
        }
        assert_eq!(occupied_bytes(&table), table.len());
    }

    #[test]
    fn test_clear_empties_every_slot() {
        let mut table = IcebergTable::new(LOG_SLOTS).expect("Failed to create table");
        for key in 0..300 {
            table.insert(key, key);
        }
        assert!(!table.is_empty());

        table.clear();

        assert!(table.is_empty());
        assert_eq!(occupied_bytes(&table), 0);
        assert_eq!(table.lookup(10), None);
        assert!(table.insert(10, 11));
        assert_eq!(table.lookup(10), Some(11));
    }

    #[test]
    fn test_stats_track_occupancy() {
        let mut table = identity_table();

        for tag in 0..SLOTS_PER_BLOCK as u64 {
            assert!(table.insert(key_for(tag, 0, 0x01), tag));
        }
        for tag in 0..5 {
            assert!(table.insert(key_for(tag, 1, 0x02), tag));
        }

        let stats = table.stats();
        assert_eq!(stats.nslots, 1024);
        assert_eq!(stats.nblocks, 32);
        assert_eq!(stats.len, 37);
        assert_eq!(stats.full_blocks, 1);
        assert_eq!(stats.empty_blocks, 30);
        assert_eq!(stats.max_block_occupancy, 32);
        assert_eq!(stats.metadata_bytes, 1024);
        assert_eq!(stats.block_bytes, 32 * 512);
        assert!((stats.load_factor() - 37.0 / 1024.0).abs() < f64::EPSILON);
        assert!((table.load_factor() - stats.load_factor()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seeded_tables_place_keys_differently() {
        use simd_iceberg::TableConfig;

        let a = IcebergTable::from_config(&TableConfig::new(16)).expect("table");
        let b = IcebergTable::from_config(&TableConfig::new(16).with_hash_seed(1)).expect("table");

        let moved = (0..64).filter(|&k| a.hash_partition(k) != b.hash_partition(k)).count();
        assert!(moved > 60, "a different seed should reshuffle nearly every key");
    }
}
