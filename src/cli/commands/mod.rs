//! CLI command implementations

mod info;
mod validate;

use crate::cli::{Cli, Command, LogLevel};
use crate::config::parse_override;
use serde_yaml::Value;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}

/// Parse `--set KEY=VALUE` arguments into override pairs
pub(crate) fn parse_overrides(raw: &[String]) -> Result<Vec<(String, Value)>, String> {
    raw.iter().map(|text| parse_override(text).map_err(|e| e.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_overrides_collects_pairs() {
        let raw = vec![
            "data.train_batch_size=1".to_string(),
            "data.num_workers=1".to_string(),
        ];
        let parsed = parse_overrides(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].0, "data.train_batch_size");
        assert_eq!(parsed[0].1, Value::from(1));
    }

    #[test]
    fn test_parse_overrides_reports_bad_pair() {
        let raw = vec!["no-equals-sign".to_string()];
        let err = parse_overrides(&raw).unwrap_err();
        assert!(err.contains("KEY=VALUE"));
    }
}
