use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use simple_wallet::{bin_utils::Service, processor::LedgerError};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Replays deposit / withdraw / balance calls from a CSV file and prints final balances.
#[derive(Parser)]
#[command(name = "simple-wallet")]
#[command(version)]
struct Cli {
    /// CSV file with `type,account,amount` rows
    input: PathBuf,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let file = File::open(&cli.input)
        .with_context(|| format!("Failed to open `{}`", cli.input.display()))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| match err {
            LedgerError::CommandErr(err) => warn!(line, "{err}"),
            // rejected calls are expected outcomes, not input errors
            LedgerError::AccountErr(err) => debug!(line, code = err.code(), "{err}"),
        }),
    };
    service.run()
}
