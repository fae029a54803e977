//! STFPM model settings
//!
//! Student-teacher feature pyramid matching: a student network trained
//! to reproduce teacher features on normal data.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// STFPM model settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stfpm {
    /// Feature extraction backbone
    #[serde(default = "default_backbone")]
    pub backbone: String,

    /// Backbone layers matched between student and teacher
    #[serde(default = "default_layers")]
    pub layers: Vec<String>,
}

impl Stfpm {
    /// Construct from descriptor init_args.
    pub fn from_init_args(args: &Value) -> Result<Self> {
        serde_yaml::from_value(args.clone())
            .map_err(|e| Error::ConfigError(format!("Invalid Stfpm init_args: {e}")))
    }
}

impl Default for Stfpm {
    fn default() -> Self {
        Self { backbone: default_backbone(), layers: default_layers() }
    }
}

fn default_backbone() -> String {
    "resnet18".to_string()
}

fn default_layers() -> Vec<String> {
    vec!["layer1".to_string(), "layer2".to_string(), "layer3".to_string()]
}
