mod key_hasher;
pub use key_hasher::KeyHasher;

mod xxh3_build_hasher;
pub use xxh3_build_hasher::{Xxh3BuildHasher, Xxh3Hasher};
