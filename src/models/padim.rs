//! PaDiM model settings
//!
//! Patch distribution modeling: per-patch multivariate Gaussians fit
//! over pretrained backbone features.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// PaDiM model settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Padim {
    /// Feature extraction backbone
    #[serde(default = "default_backbone")]
    pub backbone: String,

    /// Backbone layers to pool features from
    #[serde(default = "default_layers")]
    pub layers: Vec<String>,

    /// Use pretrained backbone weights
    #[serde(default = "default_true")]
    pub pre_trained: bool,

    /// Random feature subset size (backbone-dependent default if omitted)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_features: Option<usize>,
}

impl Padim {
    /// Construct from descriptor init_args.
    pub fn from_init_args(args: &Value) -> Result<Self> {
        serde_yaml::from_value(args.clone())
            .map_err(|e| Error::ConfigError(format!("Invalid Padim init_args: {e}")))
    }
}

impl Default for Padim {
    fn default() -> Self {
        Self {
            backbone: default_backbone(),
            layers: default_layers(),
            pre_trained: true,
            n_features: None,
        }
    }
}

fn default_backbone() -> String {
    "resnet18".to_string()
}

fn default_layers() -> Vec<String> {
    vec!["layer1".to_string(), "layer2".to_string(), "layer3".to_string()]
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_args() {
        let args: Value = serde_yaml::from_str("{}").unwrap();
        let model = Padim::from_init_args(&args).unwrap();
        assert_eq!(model, Padim::default());
        assert_eq!(model.layers, vec!["layer1", "layer2", "layer3"]);
    }

    #[test]
    fn test_full_init_args() {
        let args: Value = serde_yaml::from_str(
            r#"
backbone: resnet18
layers:
- layer1
- layer2
- layer3
pre_trained: true
n_features: null
"#,
        )
        .unwrap();

        let model = Padim::from_init_args(&args).unwrap();
        assert_eq!(model.backbone, "resnet18");
        assert!(model.pre_trained);
        assert!(model.n_features.is_none());
    }

    #[test]
    fn test_unknown_init_arg_rejected() {
        let args: Value = serde_yaml::from_str("hidden_dim: 128\n").unwrap();
        assert!(Padim::from_init_args(&args).is_err());
    }
}
