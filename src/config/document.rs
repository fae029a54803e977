//! Raw YAML document I/O
//!
//! Loads the configuration file into an untyped node tree so that
//! overrides can mutate it before the typed schema is deserialized.

use crate::error::{Error, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Load a YAML configuration document from disk.
///
/// Fails with [`Error::ConfigNotFound`] when the path does not exist,
/// and with a parse error when the file is not valid YAML. The document
/// root must be a mapping.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::ConfigNotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    let doc: Value = serde_yaml::from_str(&text)?;

    if !doc.is_mapping() {
        return Err(Error::ConfigError(format!(
            "Config root must be a mapping: {}",
            path.display()
        )));
    }

    Ok(doc)
}

/// Save a YAML document to disk.
///
/// Does not create parent directories.
pub fn save_document<P: AsRef<Path>>(doc: &Value, path: P) -> Result<()> {
    let text = serde_yaml::to_string(doc)?;
    fs::write(path.as_ref(), text).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to write config file {}: {}",
            path.as_ref().display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_document_success() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "seed_everything: true\ndefault_root_dir: results\n")
            .unwrap();

        let doc = load_document(&config_path).unwrap();
        assert_eq!(doc["seed_everything"], Value::Bool(true));
        assert_eq!(doc["default_root_dir"], Value::String("results".into()));
    }

    #[test]
    fn test_load_document_not_found() {
        let result = load_document("wrong_configs.yaml");
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_document_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("invalid.yaml");
        std::fs::write(&config_path, "this is not valid yaml: [[[").unwrap();

        let result = load_document(&config_path);
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_load_document_scalar_root_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("scalar.yaml");
        std::fs::write(&config_path, "42").unwrap();

        let result = load_document(&config_path);
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_save_document_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("out.yaml");

        let doc: Value = serde_yaml::from_str("ckpt_path: weights/model.ckpt\n").unwrap();
        save_document(&doc, &config_path).unwrap();

        let loaded = load_document(&config_path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_save_document_missing_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("dir").join("out.yaml");

        let doc: Value = serde_yaml::from_str("a: 1\n").unwrap();
        let result = save_document(&doc, &nested);
        assert!(result.is_err());
    }
}
