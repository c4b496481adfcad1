use crate::utils::parse_capacity;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the table geometry and memory footprint
    Info,

    /// Insert sequential keys and report how full the table got
    Fill {
        /// How many keys to insert (accepts `K`/`M`/`G` suffixes)
        #[arg(value_parser = parse_capacity)]
        count: u64,

        /// First key; keys run `start..start + count`, each stored with
        /// itself as the value
        #[arg(long = "start", default_value_t = 0)]
        start: u64,
    },

    /// Execute an operation script (one operation per line)
    Run {
        /// Script file (reads from stdin if not provided)
        script: Option<PathBuf>,
    },
}
