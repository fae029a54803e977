//! Engine: joint materialization from configuration
//!
//! The engine holds everything in the document that is not a component
//! descriptor. [`Engine::from_config`] is the single entry point that
//! turns a YAML file plus overrides into the (engine, model, data
//! module) triple.

use crate::config::{
    apply_overrides, load_document, validate_config, validate_datamodule, EngineConfig,
    LoggingConfig, TrainerConfig,
};
use crate::data::DataModule;
use crate::error::Result;
use crate::models::Model;
use crate::registry;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Orchestration object coordinating model and data module during
/// training and evaluation.
#[derive(Debug, Clone)]
pub struct Engine {
    seed_everything: Option<bool>,
    trainer: TrainerConfig,
    logging: LoggingConfig,
    default_root_dir: PathBuf,
    ckpt_path: Option<PathBuf>,
}

impl Engine {
    /// Construct engine, model, and data module jointly from a YAML
    /// configuration file.
    ///
    /// The document is loaded once, overrides are applied by dotted
    /// key-path mutation, the `model` and `data` descriptors are
    /// resolved through the built-in registries, and the engine is
    /// built from the remaining top-level keys.
    ///
    /// Fails with [`crate::Error::ConfigNotFound`] when the path does
    /// not exist.
    pub fn from_config<P: AsRef<Path>>(
        config_path: P,
        overrides: &[(String, Value)],
    ) -> Result<(Engine, Model, DataModule)> {
        let mut doc = load_document(config_path)?;
        apply_overrides(&mut doc, overrides)?;

        let config = EngineConfig::from_value(doc)?;
        validate_config(&config)?;

        let model =
            registry::builtin_models().resolve(&config.model.class_path, &config.model.init_args)?;
        let datamodule = registry::builtin_datamodules()
            .resolve(&config.data.class_path, &config.data.init_args)?;
        validate_datamodule(&datamodule)?;

        let engine = Engine {
            seed_everything: config.seed_everything,
            trainer: config.trainer,
            logging: config.logging,
            default_root_dir: config
                .default_root_dir
                .unwrap_or_else(|| PathBuf::from("results")),
            ckpt_path: config.ckpt_path,
        };

        Ok((engine, model, datamodule))
    }

    /// Whether all RNGs are seeded before training.
    pub fn seed_everything(&self) -> Option<bool> {
        self.seed_everything
    }

    /// Trainer settings.
    pub fn trainer(&self) -> &TrainerConfig {
        &self.trainer
    }

    /// Logging settings.
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Root directory for results and checkpoints.
    pub fn default_root_dir(&self) -> &Path {
        &self.default_root_dir
    }

    /// Checkpoint to resume from, if any.
    pub fn ckpt_path(&self) -> Option<&Path> {
        self.ckpt_path.as_deref()
    }
}
