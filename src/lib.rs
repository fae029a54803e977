//! Centinela: config-driven anomaly-detection training components
//!
//! A training engine, a model, and a data module are constructed jointly
//! from a single YAML configuration document. The `model` and `data`
//! sections are component descriptors (a `class_path` plus `init_args`)
//! resolved through a registry of built-in variants; the remaining
//! top-level keys configure the engine itself. Dotted key-path overrides
//! are applied to the raw document before any component is constructed.
//!
//! ```no_run
//! use centinela::Engine;
//!
//! let (engine, model, datamodule) = Engine::from_config("config.yaml", &[])?;
//! println!("{} / {}", model.name(), datamodule.name());
//! # Ok::<(), centinela::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;
pub mod registry;

pub use data::DataModule;
pub use engine::Engine;
pub use error::{Error, Result};
pub use models::Model;
