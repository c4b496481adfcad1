use crate::cli::{Commands, HELP_TEMPLATE};
use crate::error::TableResult;
use crate::table::{DEFAULT_LOG_SLOTS, TableConfig};
use crate::utils::parse_capacity;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    // Obtain during build time, not runtime
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
#[command(
    after_help = HELP_TEMPLATE.replace("%BINARY_NAME%", env!("CARGO_PKG_NAME"))
)]
pub struct Cli {
    /// log2 of the number of slots in the table.
    #[arg(
        short = 'l',
        long = "log-slots",
        value_name = "BITS",
        env = "SIMD_ICEBERG_LOG_SLOTS",
        default_value_t = DEFAULT_LOG_SLOTS
    )]
    pub log_slots: u64,

    /// Minimum slot count (e.g. `4096`, `64K`, `1M`). Rounded up to a power of
    /// two; takes precedence over `--log-slots`.
    #[arg(short = 'c', long = "capacity", value_name = "SLOTS", value_parser = parse_capacity)]
    pub capacity: Option<u64>,

    /// Seed for the XXH3 key hasher.
    #[arg(short = 's', long = "seed", env = "SIMD_ICEBERG_SEED", default_value_t = 0)]
    pub seed: u64,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Table configuration described by the global flags.
    pub fn table_config(&self) -> TableResult<TableConfig> {
        let config = match self.capacity {
            Some(capacity) => TableConfig::for_capacity(capacity)?,
            None => TableConfig::new(self.log_slots),
        };

        config.validate()?;

        Ok(config.with_hash_seed(self.seed))
    }
}
