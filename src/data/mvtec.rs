//! MVTec AD data module
//!
//! Industrial defect benchmark with per-category directories of normal
//! training images and mixed test images.

use super::{TestSplitMode, ValSplitMode};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::PathBuf;

/// MVTec AD data module settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MVTecAD {
    /// Dataset root directory
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Category to load (bottle, cable, ...)
    #[serde(default = "default_category")]
    pub category: String,

    /// Training batch size
    #[serde(default = "default_batch_size")]
    pub train_batch_size: usize,

    /// Evaluation batch size
    #[serde(default = "default_batch_size")]
    pub eval_batch_size: usize,

    /// Dataloader worker count
    #[serde(default = "default_num_workers")]
    pub num_workers: usize,

    /// Test split strategy
    #[serde(default)]
    pub test_split_mode: TestSplitMode,

    /// Fraction of samples held out for testing
    #[serde(default = "default_test_split_ratio")]
    pub test_split_ratio: f64,

    /// Validation split strategy
    #[serde(default)]
    pub val_split_mode: ValSplitMode,

    /// Fraction of samples held out for validation
    #[serde(default = "default_val_split_ratio")]
    pub val_split_ratio: f64,

    /// Split seed (inherits the global seed if omitted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl MVTecAD {
    /// Construct from descriptor init_args.
    pub fn from_init_args(args: &Value) -> Result<Self> {
        serde_yaml::from_value(args.clone())
            .map_err(|e| Error::ConfigError(format!("Invalid MVTecAD init_args: {e}")))
    }
}

impl Default for MVTecAD {
    fn default() -> Self {
        Self {
            root: default_root(),
            category: default_category(),
            train_batch_size: default_batch_size(),
            eval_batch_size: default_batch_size(),
            num_workers: default_num_workers(),
            test_split_mode: TestSplitMode::default(),
            test_split_ratio: default_test_split_ratio(),
            val_split_mode: ValSplitMode::default(),
            val_split_ratio: default_val_split_ratio(),
            seed: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("datasets/MVTecAD")
}

fn default_category() -> String {
    "bottle".to_string()
}

fn default_batch_size() -> usize {
    32
}

fn default_num_workers() -> usize {
    8
}

fn default_test_split_ratio() -> f64 {
    0.2
}

fn default_val_split_ratio() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_args() {
        let args: Value = serde_yaml::from_str("{}").unwrap();
        let datamodule = MVTecAD::from_init_args(&args).unwrap();
        assert_eq!(datamodule, MVTecAD::default());
    }

    #[test]
    fn test_full_init_args() {
        let args: Value = serde_yaml::from_str(
            r#"
root: datasets/MVTecAD
category: bottle
train_batch_size: 32
eval_batch_size: 32
num_workers: 8
test_split_mode: FROM_DIR
test_split_ratio: 0.2
val_split_mode: SAME_AS_TEST
val_split_ratio: 0.5
seed: null
"#,
        )
        .unwrap();

        let datamodule = MVTecAD::from_init_args(&args).unwrap();
        assert_eq!(datamodule.category, "bottle");
        assert_eq!(datamodule.train_batch_size, 32);
        assert_eq!(datamodule.num_workers, 8);
        assert_eq!(datamodule.test_split_mode, TestSplitMode::FromDir);
        assert_eq!(datamodule.val_split_mode, ValSplitMode::SameAsTest);
        assert!(datamodule.seed.is_none());
    }

    #[test]
    fn test_unknown_init_arg_rejected() {
        let args: Value = serde_yaml::from_str("batch_size: 32\n").unwrap();
        let result = MVTecAD::from_init_args(&args);
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
