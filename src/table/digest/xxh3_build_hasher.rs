use std::hash::{BuildHasher, Hasher};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// XXH3-64 hasher. Each write is hashed with the running hash as its seed, so
/// multi-part keys stay order sensitive.
#[derive(Debug, Clone)]
pub struct Xxh3Hasher {
    seed: u64,
    hash: Option<u64>,
}

impl Hasher for Xxh3Hasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        let seed = self.hash.unwrap_or(self.seed);
        self.hash = Some(xxh3_64_with_seed(bytes, seed));
    }

    /// Little-endian regardless of platform, so hashes (and therefore slot
    /// placement) agree across architectures.
    #[inline]
    fn write_u64(&mut self, n: u64) {
        self.write(&n.to_le_bytes());
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash.unwrap_or_else(|| xxh3_64_with_seed(&[], self.seed))
    }
}

/// Seeded XXH3 `BuildHasher`; the default hash collaborator of
/// [`crate::IcebergTable`].
///
/// ```
/// use simd_iceberg::digest::{KeyHasher, Xxh3BuildHasher};
/// use xxhash_rust::xxh3::xxh3_64;
///
/// let hasher = Xxh3BuildHasher::default();
/// assert_eq!(hasher.hash_key(7), xxh3_64(&7u64.to_le_bytes()));
/// assert_ne!(Xxh3BuildHasher::with_seed(1).hash_key(7), hasher.hash_key(7));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Xxh3BuildHasher {
    seed: u64,
}

impl Xxh3BuildHasher {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BuildHasher for Xxh3BuildHasher {
    type Hasher = Xxh3Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Xxh3Hasher {
            seed: self.seed,
            hash: None,
        }
    }
}
