pub mod constants;
pub use constants::*;

mod block;
pub use block::Block;

pub mod digest;

mod hash_partition;
pub use hash_partition::HashPartition;

mod iceberg_table;
pub use iceberg_table::{IcebergTable, SlotPosition};

mod slot_mask;
pub use slot_mask::*;

mod table_config;
pub use table_config::TableConfig;

mod table_metadata;
pub use table_metadata::TableMetadata;

mod table_stats;
pub use table_stats::TableStats;

pub mod traits;

mod word_select;
pub use word_select::*;
