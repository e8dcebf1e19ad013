//! Helper functions for reading schema JSON
//!
//! This module contains utility functions for extracting specific types of
//! fields from `serde_json::Value` objects, with proper error handling. The
//! `path` argument is the dotted position inside the schema file, used only
//! for error messages.

use crate::error::{SchemaError, SchemaResult};
use serde_json::{Map, Value};

/// Extend a dotted schema path with one more segment.
pub(super) fn join_path(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", path, segment)
    }
}

/// Path form used in error messages; the empty root path reads as `(root)`.
pub(super) fn error_path(path: &str) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}

/// Get a string field from a schema object by key.
pub(super) fn get_string(value: &Value, key: &str, path: &str) -> SchemaResult<Option<String>> {
    if let Some(field) = value.get(key) {
        if let Some(s) = field.as_str() {
            return Ok(Some(s.to_string()));
        }
        return Err(SchemaError::InvalidStructure {
            message: format!("Field '{}' must be a string", key),
            path: error_path(path),
        });
    }
    Ok(None)
}

/// Get a boolean field from a schema object by key.
pub(super) fn get_bool(value: &Value, key: &str, path: &str) -> SchemaResult<Option<bool>> {
    if let Some(field) = value.get(key) {
        if let Some(b) = field.as_bool() {
            return Ok(Some(b));
        }
        return Err(SchemaError::InvalidStructure {
            message: format!("Field '{}' must be a boolean", key),
            path: error_path(path),
        });
    }
    Ok(None)
}

/// Get a numeric field from a schema object by key.
pub(super) fn get_number(value: &Value, key: &str, path: &str) -> SchemaResult<Option<f64>> {
    if let Some(field) = value.get(key) {
        if let Some(n) = field.as_f64() {
            return Ok(Some(n));
        }
        return Err(SchemaError::InvalidStructure {
            message: format!("Field '{}' must be a number", key),
            path: error_path(path),
        });
    }
    Ok(None)
}

/// Get an object field from a schema object by key.
pub(super) fn get_object<'a>(
    value: &'a Value,
    key: &str,
    path: &str,
) -> SchemaResult<Option<&'a Map<String, Value>>> {
    if let Some(field) = value.get(key) {
        if let Some(obj) = field.as_object() {
            return Ok(Some(obj));
        }
        return Err(SchemaError::InvalidStructure {
            message: format!("Field '{}' must be an object", key),
            path: error_path(path),
        });
    }
    Ok(None)
}
