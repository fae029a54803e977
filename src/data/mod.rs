//! Built-in data modules
//!
//! Pluggable dataset variants selected by class path. A data module
//! carries loader settings and split strategy; the dataloading itself
//! lives in the training stack and is not materialized here.
//!
//! - `mvtec` - the MVTec AD industrial defect benchmark layout
//! - `folder` - an arbitrary normal/abnormal folder layout

pub mod folder;
pub mod mvtec;

pub use folder::Folder;
pub use mvtec::MVTecAD;

use serde::{Deserialize, Serialize};

/// How the test split is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestSplitMode {
    /// No test split
    None,
    /// Test split read from a dedicated directory
    #[default]
    FromDir,
    /// Test split synthesized from training samples
    Synthetic,
}

/// How the validation split is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValSplitMode {
    /// No validation split
    None,
    /// Validation reuses the test set
    #[default]
    SameAsTest,
    /// Validation split carved from the training set
    FromTrain,
    /// Validation split carved from the test set
    FromTest,
    /// Validation split synthesized from training samples
    Synthetic,
}

/// A materialized data module variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DataModule {
    MVTecAD(MVTecAD),
    Folder(Folder),
}

impl DataModule {
    /// Variant name for reporting.
    pub fn name(&self) -> &'static str {
        match self {
            DataModule::MVTecAD(_) => "MVTecAD",
            DataModule::Folder(_) => "Folder",
        }
    }

    /// Training batch size of the underlying loader settings.
    pub fn train_batch_size(&self) -> usize {
        match self {
            DataModule::MVTecAD(d) => d.train_batch_size,
            DataModule::Folder(d) => d.train_batch_size,
        }
    }

    /// Evaluation batch size of the underlying loader settings.
    pub fn eval_batch_size(&self) -> usize {
        match self {
            DataModule::MVTecAD(d) => d.eval_batch_size,
            DataModule::Folder(d) => d.eval_batch_size,
        }
    }

    /// Worker count of the underlying loader settings.
    pub fn num_workers(&self) -> usize {
        match self {
            DataModule::MVTecAD(d) => d.num_workers,
            DataModule::Folder(d) => d.num_workers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_mode_wire_forms() {
        let mode: TestSplitMode = serde_yaml::from_str("FROM_DIR").unwrap();
        assert_eq!(mode, TestSplitMode::FromDir);

        let mode: ValSplitMode = serde_yaml::from_str("SAME_AS_TEST").unwrap();
        assert_eq!(mode, ValSplitMode::SameAsTest);

        let mode: ValSplitMode = serde_yaml::from_str("FROM_TRAIN").unwrap();
        assert_eq!(mode, ValSplitMode::FromTrain);
    }

    #[test]
    fn test_split_mode_unknown_rejected() {
        let result: Result<TestSplitMode, _> = serde_yaml::from_str("FROM_NOWHERE");
        assert!(result.is_err());
    }

    #[test]
    fn test_datamodule_accessors() {
        let datamodule = DataModule::MVTecAD(MVTecAD::default());
        assert_eq!(datamodule.name(), "MVTecAD");
        assert_eq!(datamodule.train_batch_size(), 32);
        assert_eq!(datamodule.eval_batch_size(), 32);
        assert_eq!(datamodule.num_workers(), 8);
    }
}
