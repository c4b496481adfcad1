use clap::Parser;
use simd_iceberg::cli::{Cli, execute_command};
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so script output on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    execute_command(&cli);
}
