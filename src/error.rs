//! Crate-wide error types

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Cannot apply override '{path}': {reason}")]
    OverrideError { path: String, reason: String },

    #[error("Unknown class path '{path}'. Registered: {known}")]
    UnknownClassPath { path: String, known: String },

    #[error("Validation error: {0}")]
    Validation(#[from] crate::config::ValidationError),
}
