//! Configuration loading and mutation
//!
//! This module is organized into submodules:
//! - `document` - raw YAML document load/save
//! - `schema` - typed configuration structures
//! - `overrides` - dotted key-path overrides on the raw document
//! - `validate` - schema validation after materialization

pub mod document;
pub mod overrides;
pub mod schema;
pub mod validate;

pub use document::{load_document, save_document};
pub use overrides::{apply_overrides, parse_override, resolve_path};
pub use schema::{ComponentDescriptor, EngineConfig, LoggingConfig, TrainerConfig};
pub use validate::{validate_config, validate_datamodule, ValidationError};
