//! Built-in anomaly model variants
//!
//! Pluggable model variants selected by class path. Only the descriptor
//! arguments are materialized here; the network weights and the batch
//! loop belong to the training stack.
//!
//! - `padim` - patch distribution modeling
//! - `stfpm` - student-teacher feature pyramid matching

pub mod padim;
pub mod stfpm;

pub use padim::Padim;
pub use stfpm::Stfpm;

use serde::Serialize;

/// A materialized anomaly model variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Model {
    Padim(Padim),
    Stfpm(Stfpm),
}

impl Model {
    /// Variant name for reporting.
    pub fn name(&self) -> &'static str {
        match self {
            Model::Padim(_) => "Padim",
            Model::Stfpm(_) => "Stfpm",
        }
    }

    /// Backbone network the variant extracts features from.
    pub fn backbone(&self) -> &str {
        match self {
            Model::Padim(m) => &m.backbone,
            Model::Stfpm(m) => &m.backbone,
        }
    }
}
