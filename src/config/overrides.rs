//! Dotted key-path overrides
//!
//! Overrides mutate the raw YAML document before the typed schema is
//! deserialized, so a replaced value flows through descriptor resolution
//! exactly as if it had been written in the file.
//!
//! Component sections use a shorthand: `data.train_batch_size` routes
//! under `data.init_args.train_batch_size`, since everything in a
//! component section other than `class_path` lives in its `init_args`.
//! Explicit `class_path` / `init_args` segments pass through untouched.

use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};

/// Top-level sections holding a component descriptor.
const COMPONENT_SECTIONS: &[&str] = &["model", "data"];

/// Keys a component descriptor owns directly.
const DESCRIPTOR_KEYS: &[&str] = &["class_path", "init_args"];

/// Apply a set of dotted key-path overrides to a document in order.
///
/// Intermediate mappings are created on demand; overriding through a
/// scalar or sequence node fails with an error naming the path.
pub fn apply_overrides(doc: &mut Value, overrides: &[(String, Value)]) -> Result<()> {
    for (path, value) in overrides {
        apply_override(doc, path, value.clone())?;
    }
    Ok(())
}

/// Read the node an override path points at, applying the same component
/// shorthand routing as [`apply_overrides`].
pub fn resolve_path<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = route_segments(path).ok()?;
    let mut node = doc;
    for segment in &segments {
        node = node.as_mapping()?.get(segment.as_str())?;
    }
    Some(node)
}

/// Parse a `key=value` override as passed on the command line.
///
/// The value text is parsed as a YAML scalar, so `8` is an integer,
/// `true` a boolean, and `bottle` a string.
pub fn parse_override(text: &str) -> Result<(String, Value)> {
    let (key, raw) = text.split_once('=').ok_or_else(|| Error::OverrideError {
        path: text.to_string(),
        reason: "expected KEY=VALUE".to_string(),
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::OverrideError {
            path: text.to_string(),
            reason: "empty key".to_string(),
        });
    }

    let value: Value = serde_yaml::from_str(raw.trim()).map_err(|e| Error::OverrideError {
        path: key.to_string(),
        reason: format!("unparseable value '{}': {}", raw.trim(), e),
    })?;

    Ok((key.to_string(), value))
}

fn apply_override(doc: &mut Value, path: &str, value: Value) -> Result<()> {
    let segments = route_segments(path)?;
    let mapping = doc.as_mapping_mut().ok_or_else(|| Error::OverrideError {
        path: path.to_string(),
        reason: "document root is not a mapping".to_string(),
    })?;
    set_path(mapping, &segments, value, path)
}

/// Expand the component shorthand into an explicit `init_args` path.
fn route_segments(path: &str) -> Result<Vec<String>> {
    let segments: Vec<String> = path.split('.').map(str::to_string).collect();
    if segments.iter().any(String::is_empty) {
        return Err(Error::OverrideError {
            path: path.to_string(),
            reason: "empty path segment".to_string(),
        });
    }

    if segments.len() >= 2
        && COMPONENT_SECTIONS.contains(&segments[0].as_str())
        && !DESCRIPTOR_KEYS.contains(&segments[1].as_str())
    {
        let mut routed = Vec::with_capacity(segments.len() + 1);
        routed.push(segments[0].clone());
        routed.push("init_args".to_string());
        routed.extend(segments[1..].iter().cloned());
        return Ok(routed);
    }

    Ok(segments)
}

fn set_path(mapping: &mut Mapping, segments: &[String], value: Value, full: &str) -> Result<()> {
    let key = Value::String(segments[0].clone());

    if segments.len() == 1 {
        mapping.insert(key, value);
        return Ok(());
    }

    if !mapping.contains_key(&key) {
        mapping.insert(key.clone(), Value::Mapping(Mapping::new()));
    }

    let child = mapping.get_mut(&key).ok_or_else(|| Error::OverrideError {
        path: full.to_string(),
        reason: format!("segment '{}' missing after insert", segments[0]),
    })?;

    // Null nodes become mappings so overrides can reach into them.
    if child.is_null() {
        *child = Value::Mapping(Mapping::new());
    }

    match child.as_mapping_mut() {
        Some(m) => set_path(m, &segments[1..], value, full),
        None => Err(Error::OverrideError {
            path: full.to_string(),
            reason: format!("segment '{}' is not a mapping", segments[0]),
        }),
    }
}
