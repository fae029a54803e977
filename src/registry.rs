//! Class-path registry
//!
//! Maps descriptor class paths to constructors, the static counterpart
//! of dynamic class resolution in config-driven training frameworks.
//! Resolution accepts the full dotted path or its final segment as an
//! alias, so `centinela.models.Padim` and `Padim` name the same entry.

use crate::data::{DataModule, Folder, MVTecAD};
use crate::error::{Error, Result};
use crate::models::{Model, Padim, Stfpm};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Constructor taking descriptor init_args.
pub type Constructor<T> = fn(&Value) -> Result<T>;

/// Registry from class path to constructor.
pub struct Registry<T> {
    entries: BTreeMap<String, Constructor<T>>,
}

impl<T> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Register a constructor under a class path.
    ///
    /// A later registration under the same path replaces the earlier one.
    pub fn register(&mut self, class_path: &str, ctor: Constructor<T>) {
        self.entries.insert(class_path.to_string(), ctor);
    }

    /// Resolve a class path and construct the component from init_args.
    pub fn resolve(&self, class_path: &str, init_args: &Value) -> Result<T> {
        if let Some(ctor) = self.entries.get(class_path) {
            return ctor(init_args);
        }

        // Final-segment alias: `Padim` for `centinela.models.Padim`.
        let alias = class_path.rsplit('.').next().unwrap_or(class_path);
        if let Some((_, ctor)) =
            self.entries.iter().find(|(path, _)| path.rsplit('.').next() == Some(alias))
        {
            return ctor(init_args);
        }

        Err(Error::UnknownClassPath {
            path: class_path.to_string(),
            known: self.entries.keys().cloned().collect::<Vec<_>>().join(", "),
        })
    }

    /// Registered class paths, in sorted order.
    pub fn class_paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry pre-populated with the built-in model variants.
pub fn builtin_models() -> Registry<Model> {
    let mut registry = Registry::new();
    registry.register("centinela.models.Padim", |args| {
        Padim::from_init_args(args).map(Model::Padim)
    });
    registry.register("centinela.models.Stfpm", |args| {
        Stfpm::from_init_args(args).map(Model::Stfpm)
    });
    registry
}

/// Registry pre-populated with the built-in data module variants.
pub fn builtin_datamodules() -> Registry<DataModule> {
    let mut registry = Registry::new();
    registry.register("centinela.data.MVTecAD", |args| {
        MVTecAD::from_init_args(args).map(DataModule::MVTecAD)
    });
    registry.register("centinela.data.Folder", |args| {
        Folder::from_init_args(args).map(DataModule::Folder)
    });
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Mapping;

    fn empty_args() -> Value {
        Value::Mapping(Mapping::new())
    }

    #[test]
    fn test_resolve_full_path() {
        let registry = builtin_models();
        let model = registry.resolve("centinela.models.Padim", &empty_args()).unwrap();
        assert_eq!(model.name(), "Padim");
    }

    #[test]
    fn test_resolve_final_segment_alias() {
        let registry = builtin_datamodules();
        let datamodule = registry.resolve("MVTecAD", &empty_args()).unwrap();
        assert_eq!(datamodule.name(), "MVTecAD");
    }

    #[test]
    fn test_unknown_path_lists_known_entries() {
        let registry = builtin_models();
        let err = registry.resolve("centinela.models.Nonexistent", &empty_args()).unwrap_err();
        match err {
            Error::UnknownClassPath { path, known } => {
                assert_eq!(path, "centinela.models.Nonexistent");
                assert!(known.contains("centinela.models.Padim"));
                assert!(known.contains("centinela.models.Stfpm"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_constructor_error_propagates() {
        let registry = builtin_models();
        let args: Value = serde_yaml::from_str("bogus_field: 1\n").unwrap();
        let result = registry.resolve("centinela.models.Padim", &args);
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_register_replaces_entry() {
        let mut registry: Registry<u32> = Registry::new();
        registry.register("a.B", |_| Ok(1));
        registry.register("a.B", |_| Ok(2));
        assert_eq!(registry.resolve("a.B", &empty_args()).unwrap(), 2);
        assert_eq!(registry.class_paths().count(), 1);
    }
}
