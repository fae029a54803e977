//! Centinela CLI
//!
//! Config-driven materialization entry point for the centinela library.
//!
//! # Usage
//!
//! ```bash
//! # Validate a config
//! centinela validate config.yaml
//!
//! # Validate with overrides
//! centinela validate config.yaml --set data.train_batch_size=8
//!
//! # Show config info
//! centinela info config.yaml --format yaml
//! ```

use centinela::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
