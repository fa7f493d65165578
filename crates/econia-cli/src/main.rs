//! econia-params - Entry Point
//!
//! Derives Econia market registration parameters from decimal granularity.

use anyhow::Result;
use clap::Parser;
use econia_cli::Command;
use tracing::debug;

/// Derive Econia market parameters (lot size, tick size, min size)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();

    econia_telemetry::init_logging()?;

    debug!(command = ?args.command, "Running econia-params v{}", env!("CARGO_PKG_VERSION"));

    for line in econia_cli::run(&args.command)? {
        println!("{line}");
    }

    Ok(())
}
