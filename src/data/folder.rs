//! Folder data module
//!
//! Generic layout for custom datasets: a directory of normal images and
//! an optional directory of abnormal images.

use super::{TestSplitMode, ValSplitMode};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::PathBuf;

/// Folder data module settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Folder {
    /// Dataset name (required)
    pub name: String,

    /// Directory of normal images (required)
    pub normal_dir: PathBuf,

    /// Dataset root the directories are relative to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Directory of abnormal images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abnormal_dir: Option<PathBuf>,

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

impl Folder {
    /// Construct from descriptor init_args.
    pub fn from_init_args(args: &Value) -> Result<Self> {
        serde_yaml::from_value(args.clone())
            .map_err(|e| Error::ConfigError(format!("Invalid Folder init_args: {e}")))
    }
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
    fn test_required_fields() {
        let args: Value = serde_yaml::from_str("name: hazelnut\nnormal_dir: good\n").unwrap();
        let datamodule = Folder::from_init_args(&args).unwrap();
        assert_eq!(datamodule.name, "hazelnut");
        assert_eq!(datamodule.normal_dir, PathBuf::from("good"));
        assert_eq!(datamodule.train_batch_size, 32);
        assert!(datamodule.abnormal_dir.is_none());
    }

    #[test]
    fn test_missing_name_fails() {
        let args: Value = serde_yaml::from_str("normal_dir: good\n").unwrap();
        assert!(Folder::from_init_args(&args).is_err());
    }
}
