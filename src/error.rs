//! Error types for the table.

use thiserror::Error;

/// Result type alias using [`TableError`].
pub type TableResult<T> = std::result::Result<T, TableError>;

/// Errors reported by table construction, configuration and `try_insert`.
///
/// Lookups and removals that find nothing are not errors; they report
/// `None` / `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("log_slots must be within {min}..={max}, got {log_slots}")]
    InvalidLogSlots { log_slots: u64, min: u64, max: u64 },

    #[error("Failed to allocate {bytes} bytes for the table")]
    AllocationFailed { bytes: u64 },

    #[error("Block {block_index} has no empty slot")]
    CapacityExhausted { block_index: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
