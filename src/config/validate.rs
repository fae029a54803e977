//! Configuration validation
//!
//! Catches bad values at materialization time, before any component is
//! handed to a caller.

use super::schema::EngineConfig;
use crate::data::DataModule;
use thiserror::Error;

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid num_nodes: {0} (must be > 0)")]
    InvalidNumNodes(usize),

    #[error("Invalid max_steps: {0} (must be -1 or positive)")]
    InvalidMaxSteps(i64),

    #[error("Invalid accumulate_grad_batches: {0} (must be > 0)")]
    InvalidAccumulation(usize),

    #[error("Invalid overfit_batches: {0} (must be >= 0.0)")]
    InvalidOverfitBatches(f64),

    #[error("Empty class_path for {0}")]
    EmptyClassPath(&'static str),

    #[error("Invalid {field}: {value} (must be > 0)")]
    InvalidBatchSize { field: &'static str, value: usize },

    #[error("Invalid {field}: {value} (must be in (0.0, 1.0))")]
    InvalidSplitRatio { field: &'static str, value: f64 },
}

/// Validate the typed configuration before descriptor resolution.
pub fn validate_config(config: &EngineConfig) -> ValidationResult<()> {
    if config.trainer.num_nodes == 0 {
        return Err(ValidationError::InvalidNumNodes(0));
    }

    if config.trainer.max_steps < -1 || config.trainer.max_steps == 0 {
        return Err(ValidationError::InvalidMaxSteps(config.trainer.max_steps));
    }

    if config.trainer.accumulate_grad_batches == 0 {
        return Err(ValidationError::InvalidAccumulation(0));
    }

    if config.trainer.overfit_batches < 0.0 {
        return Err(ValidationError::InvalidOverfitBatches(config.trainer.overfit_batches));
    }

    if config.model.class_path.is_empty() {
        return Err(ValidationError::EmptyClassPath("model"));
    }

    if config.data.class_path.is_empty() {
        return Err(ValidationError::EmptyClassPath("data"));
    }

    Ok(())
}

/// Validate a materialized data module.
pub fn validate_datamodule(datamodule: &DataModule) -> ValidationResult<()> {
    check_batch_size("train_batch_size", datamodule.train_batch_size())?;
    check_batch_size("eval_batch_size", datamodule.eval_batch_size())?;

    match datamodule {
        DataModule::MVTecAD(d) => {
            check_split_ratio("test_split_ratio", d.test_split_ratio)?;
            check_split_ratio("val_split_ratio", d.val_split_ratio)?;
        }
        DataModule::Folder(d) => {
            check_split_ratio("test_split_ratio", d.test_split_ratio)?;
            check_split_ratio("val_split_ratio", d.val_split_ratio)?;
        }
    }

    Ok(())
}

fn check_batch_size(field: &'static str, value: usize) -> ValidationResult<()> {
    if value == 0 {
        return Err(ValidationError::InvalidBatchSize { field, value });
    }
    Ok(())
}

fn check_split_ratio(field: &'static str, value: f64) -> ValidationResult<()> {
    if value <= 0.0 || value >= 1.0 {
        return Err(ValidationError::InvalidSplitRatio { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MVTecAD;
    use serde_yaml::Value;

    fn config(yaml: &str) -> EngineConfig {
        let doc: Value = serde_yaml::from_str(yaml).unwrap();
        EngineConfig::from_value(doc).unwrap()
    }

    const MINIMAL: &str = "model:\n  class_path: p\ndata:\n  class_path: d\n";

    #[test]
    fn test_valid_minimal_config() {
        assert!(validate_config(&config(MINIMAL)).is_ok());
    }

    #[test]
    fn test_zero_num_nodes_rejected() {
        let cfg = config("trainer:\n  num_nodes: 0\nmodel:\n  class_path: p\ndata:\n  class_path: d\n");
        assert!(matches!(validate_config(&cfg), Err(ValidationError::InvalidNumNodes(0))));
    }

    #[test]
    fn test_bad_max_steps_rejected() {
        for steps in ["-2", "0"] {
            let cfg = config(&format!(
                "trainer:\n  max_steps: {steps}\nmodel:\n  class_path: p\ndata:\n  class_path: d\n"
            ));
            assert!(matches!(validate_config(&cfg), Err(ValidationError::InvalidMaxSteps(_))));
        }
    }

    #[test]
    fn test_empty_class_path_rejected() {
        let cfg = config("model:\n  class_path: ''\ndata:\n  class_path: d\n");
        assert!(matches!(
            validate_config(&cfg),
            Err(ValidationError::EmptyClassPath("model"))
        ));
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let datamodule = DataModule::MVTecAD(MVTecAD {
            train_batch_size: 0,
            ..MVTecAD::default()
        });
        assert!(matches!(
            validate_datamodule(&datamodule),
            Err(ValidationError::InvalidBatchSize { field: "train_batch_size", .. })
        ));
    }

    #[test]
    fn test_out_of_range_split_ratio_rejected() {
        let datamodule = DataModule::MVTecAD(MVTecAD {
            val_split_ratio: 1.5,
            ..MVTecAD::default()
        });
        assert!(matches!(
            validate_datamodule(&datamodule),
            Err(ValidationError::InvalidSplitRatio { field: "val_split_ratio", .. })
        ));
    }
}
