//! # SIMD Iceberg
//!
//! A fixed-capacity, fingerprint-indexed hash table. Every key is hashed
//! once and the hash is split into a block index, an 8-bit fingerprint and a
//! residual tag. A lookup loads the 32 fingerprint bytes of one block, finds
//! the matching slots with a single vector compare, and walks the candidates
//! with a PDEP-based rank-select.
//!
//! Keys are never stored, so lookups are probabilistic: two keys sharing the
//! same block index, fingerprint and tag are indistinguishable.
//!
//! ```
//! use simd_iceberg::{
//!     IcebergTable,
//!     traits::{TableReader, TableWriter},
//! };
//!
//! let mut table = IcebergTable::new(10).unwrap();
//! assert!(table.insert(42, 4200));
//! assert_eq!(table.lookup(42), Some(4200));
//! assert!(table.remove(42, 4200));
//! assert_eq!(table.lookup(42), None);
//! ```

pub mod table;
pub use table::*;

pub mod error;
pub use error::{TableError, TableResult};

pub mod cli;

pub mod utils;
pub use utils::format_bytes;
