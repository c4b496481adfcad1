use crate::cli::{Cli, Commands, run_script};
use crate::table::traits::TableWriter;
use crate::table::{FPRINT_BITS, IcebergTable, SLOTS_PER_BLOCK, TableConfig};
use crate::utils::format_bytes;
use std::fs::File;
use std::io::{self, BufReader, Write};
use tracing::info;

/// Executes the parsed CLI command against a freshly built table.
///
/// The table lives only for the duration of the command; nothing is
/// persisted. Errors are printed to stderr and terminate the process with
/// status 1.
pub fn execute_command(cli: &Cli) {
    let config = cli.table_config().unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    });

    let mut table = IcebergTable::from_config(&config).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    });

    match &cli.command {
        Commands::Info => print_info(&config, &table),

        Commands::Fill { count, start } => {
            let mut rejected: u64 = 0;

            for key in *start..start.saturating_add(*count) {
                if !table.insert(key, key) {
                    rejected += 1;
                }
            }

            info!(count, rejected, "Fill finished");

            let stats = table.stats();

            println!("\n{:=^50}", " FILL SUMMARY ");
            println!("{:<25} {}", "ATTEMPTED:", count);
            println!("{:<25} {}", "INSERTED:", stats.len);
            println!("{:<25} {}", "REJECTED (BLOCK FULL):", rejected);
            println!("{:-<50}", ""); // Separator
            println!("{:<25} {:.4}", "LOAD FACTOR:", stats.load_factor());
            println!("{:<25} {} / {}", "FULL BLOCKS:", stats.full_blocks, stats.nblocks);
            println!("{:<25} {}", "EMPTY BLOCKS:", stats.empty_blocks);
            println!(
                "{:<25} {} / {}",
                "FULLEST BLOCK:", stats.max_block_occupancy, SLOTS_PER_BLOCK
            );
            println!("{:=<50}", ""); // Footer
        }

        Commands::Run { script } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();

            let result = match script {
                Some(path) => match File::open(path) {
                    Ok(file) => run_script(&mut table, BufReader::new(file), &mut out),
                    Err(err) => Err(format!("Failed to open {:?}: {}", path, err)),
                },
                None => run_script(&mut table, io::stdin().lock(), &mut out),
            };

            if let Err(err) = out.flush() {
                eprintln!("Error: Failed to flush output: {}", err);
                std::process::exit(1);
            }

            match result {
                Ok(executed) => info!(executed, "Script finished"),
                Err(err) => {
                    eprintln!("Error: {}", err);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn print_info(config: &TableConfig, table: &IcebergTable) {
    let stats = table.stats();
    let tag_bits = 64 - FPRINT_BITS - stats.block_bits;

    println!("\n{:=^50}", " TABLE INFO ");
    println!("{:<25} {}", "LOG SLOTS:", table.log_slots());
    println!("{:<25} {}", "SLOTS:", stats.nslots);
    println!("{:<25} {}", "BLOCKS:", stats.nblocks);
    println!("{:<25} {}", "SLOTS PER BLOCK:", SLOTS_PER_BLOCK);
    println!("{:-<50}", ""); // Separator

    println!("{:<25} {}", "FINGERPRINT BITS:", FPRINT_BITS);
    println!("{:<25} {}", "BLOCK INDEX BITS:", stats.block_bits);
    println!("{:<25} {}", "TAG BITS:", tag_bits);
    println!("{:<25} {}", "HASH SEED:", config.hash_seed);
    println!("{:-<50}", ""); // Separator

    println!("{:<25} {}", "METADATA SIZE:", format_bytes(stats.metadata_bytes));
    println!("{:<25} {}", "BLOCKS SIZE:", format_bytes(stats.block_bytes));
    println!("{:<25} {}", "TOTAL SIZE:", format_bytes(stats.total_bytes()));
    println!("{:=<50}", ""); // Footer
}
