//! Validate command implementation

use super::parse_overrides;
use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::engine::Engine;

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let overrides = parse_overrides(&args.overrides)?;

    let (engine, model, datamodule) =
        Engine::from_config(&args.config, &overrides).map_err(|e| format!("Config error: {e}"))?;

    log(level, LogLevel::Normal, &format!("{}: ok", args.config.display()));
    log(level, LogLevel::Verbose, &format!("model: {} ({})", model.name(), model.backbone()));
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "data: {} (train_batch_size={}, num_workers={})",
            datamodule.name(),
            datamodule.train_batch_size(),
            datamodule.num_workers()
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("root dir: {}", engine.default_root_dir().display()),
    );

    Ok(())
}
