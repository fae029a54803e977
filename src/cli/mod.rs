//! CLI module for centinela
//!
//! This module contains the argument definitions, command handlers, and
//! output utilities.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface
#[derive(Debug, Parser)]
#[command(name = "centinela", version, about = "Config-driven anomaly-detection training components")]
pub struct Cli {
    /// Verbose output with additional details
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Materialize a config and report validation results
    Validate(ValidateArgs),
    /// Print a summary of the materialized components
    Info(InfoArgs),
}

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the YAML config
    pub config: PathBuf,

    /// Dotted key-path override, e.g. data.train_batch_size=8
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

/// Arguments for the info command
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Path to the YAML config
    pub config: PathBuf,

    /// Dotted key-path override, e.g. data.train_batch_size=8
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Output format (text, json, yaml)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for the info command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format '{other}' (expected text, json, yaml)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_validate_with_overrides() {
        let cli = Cli::parse_from([
            "centinela",
            "validate",
            "config.yaml",
            "--set",
            "data.train_batch_size=1",
            "--set",
            "data.num_workers=1",
        ]);
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.config, PathBuf::from("config.yaml"));
                assert_eq!(args.overrides.len(), 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_info_format() {
        let cli = Cli::parse_from(["centinela", "info", "config.yaml", "--format", "yaml"]);
        match cli.command {
            Command::Info(args) => assert_eq!(args.format, OutputFormat::Yaml),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
