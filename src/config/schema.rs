//! Typed configuration structures
//!
//! The typed view of the YAML document, deserialized after overrides
//! have been applied. The `model` and `data` sections stay untyped
//! descriptors here; the registry resolves them into concrete
//! components.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};
use std::path::PathBuf;

/// Deserialize a string from either a YAML integer (`2`) or a string
/// (`"auto"`), normalizing to a string. Device counts and precision
/// specs come in both spellings.
fn deserialize_scalar_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(i) => Ok(i.to_string()),
        IntOrString::Str(s) => Ok(s),
    }
}

/// Same as [`deserialize_scalar_as_string`] but for optional fields.
fn deserialize_opt_scalar_as_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    let parsed: Option<IntOrString> = Option::deserialize(deserializer)?;
    Ok(parsed.map(|v| match v {
        IntOrString::Int(i) => i.to_string(),
        IntOrString::Str(s) => s,
    }))
}

/// Complete engine configuration (root structure)
///
/// # Required Fields
/// - `model`: component descriptor for the anomaly model
/// - `data`: component descriptor for the data module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed all RNGs before training
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_everything: Option<bool>,

    /// Trainer settings
    #[serde(default)]
    pub trainer: TrainerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Root directory for results and checkpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_root_dir: Option<PathBuf>,

    /// Checkpoint to resume from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ckpt_path: Option<PathBuf>,

    /// Model descriptor (required)
    pub model: ComponentDescriptor,

    /// Data module descriptor (required)
    pub data: ComponentDescriptor,
}

impl EngineConfig {
    /// Deserialize the typed configuration from an (already overridden)
    /// document.
    pub fn from_value(doc: Value) -> Result<Self> {
        serde_yaml::from_value(doc)
            .map_err(|e| Error::ConfigError(format!("Invalid engine config: {e}")))
    }
}

/// Component descriptor: a class path plus constructor arguments
///
/// Used uniformly for the `model` and `data` sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Dotted type path, e.g. `centinela.models.Padim`
    pub class_path: String,

    /// Constructor keyword arguments
    #[serde(default = "empty_mapping")]
    pub init_args: Value,
}

fn empty_mapping() -> Value {
    Value::Mapping(Mapping::new())
}

/// Trainer settings
///
/// Mirrors the trainer key set of the configuration format. Fields not
/// exercised by component materialization are carried so that a full
/// document round-trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Hardware accelerator (auto, cpu, gpu)
    #[serde(default = "default_auto")]
    pub accelerator: String,

    /// Distribution strategy (auto, ddp)
    #[serde(default = "default_auto")]
    pub strategy: String,

    /// Device selection (auto, an index, or a count)
    #[serde(default = "default_auto", deserialize_with = "deserialize_scalar_as_string")]
    pub devices: String,

    /// Number of nodes
    #[serde(default = "default_one")]
    pub num_nodes: usize,

    /// Numeric precision (e.g. "32", "16-mixed")
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_opt_scalar_as_string"
    )]
    pub precision: Option<String>,

    /// Run a single batch through fit and test as a smoke check
    #[serde(default)]
    pub fast_dev_run: bool,

    /// Epoch ceiling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_epochs: Option<usize>,

    /// Epoch floor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_epochs: Option<usize>,

    /// Step ceiling (-1 for unlimited)
    #[serde(default = "default_max_steps")]
    pub max_steps: i64,

    /// Step floor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_steps: Option<usize>,

    /// Wall-clock ceiling (e.g. "01:00:00:00")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time: Option<String>,

    /// Fraction or count of training batches to use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_train_batches: Option<f64>,

    /// Fraction or count of validation batches to use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_val_batches: Option<f64>,

    /// Fraction or count of test batches to use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_test_batches: Option<f64>,

    /// Fraction or count of predict batches to use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_predict_batches: Option<f64>,

    /// Overfit on a fraction of the training data
    #[serde(default)]
    pub overfit_batches: f64,

    /// Validation frequency within an epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub val_check_interval: Option<f64>,

    /// Validate every N epochs
    #[serde(default = "default_one")]
    pub check_val_every_n_epoch: usize,

    /// Sanity validation batches before training
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_sanity_val_steps: Option<usize>,

    /// Logging frequency in steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_every_n_steps: Option<usize>,

    /// Enable checkpoint saving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_checkpointing: Option<bool>,

    /// Enable the progress bar
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_progress_bar: Option<bool>,

    /// Enable the model summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_model_summary: Option<bool>,

    /// Gradient accumulation steps
    #[serde(default = "default_one")]
    pub accumulate_grad_batches: usize,

    /// Gradient clipping value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_clip_val: Option<f64>,

    /// Gradient clipping algorithm (norm, value)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_clip_algorithm: Option<String>,

    /// Force deterministic algorithms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deterministic: Option<bool>,

    /// Enable the autotuner benchmark mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<bool>,

    /// Run evaluation under inference mode
    #[serde(default = "default_true")]
    pub inference_mode: bool,

    /// Wrap samplers for distributed training
    #[serde(default = "default_true")]
    pub use_distributed_sampler: bool,

    /// Detect NaN/Inf in losses and parameters
    #[serde(default)]
    pub detect_anomaly: bool,

    /// Disable all non-essential features
    #[serde(default)]
    pub barebones: bool,

    /// Synchronize batch norm across devices
    #[serde(default)]
    pub sync_batchnorm: bool,

    /// Rebuild dataloaders every N epochs
    #[serde(default)]
    pub reload_dataloaders_every_n_epochs: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            accelerator: default_auto(),
            strategy: default_auto(),
            devices: default_auto(),
            num_nodes: 1,
            precision: None,
            fast_dev_run: false,
            max_epochs: None,
            min_epochs: None,
            max_steps: -1,
            min_steps: None,
            max_time: None,
            limit_train_batches: None,
            limit_val_batches: None,
            limit_test_batches: None,
            limit_predict_batches: None,
            overfit_batches: 0.0,
            val_check_interval: None,
            check_val_every_n_epoch: 1,
            num_sanity_val_steps: None,
            log_every_n_steps: None,
            enable_checkpointing: None,
            enable_progress_bar: None,
            enable_model_summary: None,
            accumulate_grad_batches: 1,
            gradient_clip_val: None,
            gradient_clip_algorithm: None,
            deterministic: None,
            benchmark: None,
            inference_mode: true,
            use_distributed_sampler: true,
            detect_anomaly: false,
            barebones: false,
            sync_batchnorm: false,
            reload_dataloaders_every_n_epochs: 0,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log the computation graph
    #[serde(default)]
    pub log_graph: bool,
}

fn default_auto() -> String {
    "auto".to_string()
}

fn default_one() -> usize {
    1
}

fn default_max_steps() -> i64 {
    -1
}

fn default_true() -> bool {
    true
}
