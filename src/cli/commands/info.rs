//! Info command implementation

use super::parse_overrides;
use crate::cli::logging::log;
use crate::cli::{InfoArgs, LogLevel, OutputFormat};
use crate::config::TrainerConfig;
use crate::data::DataModule;
use crate::engine::Engine;
use crate::models::Model;
use serde::Serialize;

/// Serializable view of the materialized triple
#[derive(Serialize)]
struct Summary<'a> {
    model: &'a Model,
    data: &'a DataModule,
    trainer: &'a TrainerConfig,
    default_root_dir: String,
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let overrides = parse_overrides(&args.overrides)?;

    let (engine, model, datamodule) =
        Engine::from_config(&args.config, &overrides).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Model: {} (backbone={})", model.name(), model.backbone());
            println!(
                "Data: {} (train_batch_size={}, eval_batch_size={}, num_workers={})",
                datamodule.name(),
                datamodule.train_batch_size(),
                datamodule.eval_batch_size(),
                datamodule.num_workers()
            );
            println!(
                "Trainer: accelerator={}, devices={}, max_epochs={}",
                engine.trainer().accelerator,
                engine.trainer().devices,
                engine
                    .trainer()
                    .max_epochs
                    .map_or_else(|| "unset".to_string(), |e| e.to_string())
            );
            println!("Root dir: {}", engine.default_root_dir().display());
            if let Some(ckpt) = engine.ckpt_path() {
                println!("Checkpoint: {}", ckpt.display());
            }
        }
        OutputFormat::Json => {
            let summary = summary(&engine, &model, &datamodule);
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let summary = summary(&engine, &model, &datamodule);
            let yaml = serde_yaml::to_string(&summary)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}

fn summary<'a>(engine: &'a Engine, model: &'a Model, datamodule: &'a DataModule) -> Summary<'a> {
    Summary {
        model,
        data: datamodule,
        trainer: engine.trainer(),
        default_root_dir: engine.default_root_dir().display().to_string(),
    }
}
