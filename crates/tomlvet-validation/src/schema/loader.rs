//! Loading schemas from their JSON wire form
//!
//! [`RootSchema::from_value`] is the entry point. Each schema node must
//! carry a `type` tag; the per-type parsers below read the constraint
//! fields that tag recognizes. Unrecognized fields are ignored, so schema
//! files can carry annotations this validator does not interpret (such as
//! `description` on nested schemas or a `required` list).

use std::collections::HashMap;

use serde_json::Value;

use super::helpers::{error_path, get_bool, get_number, get_object, get_string, join_path};
use super::types::{ArraySchema, NumericSchema, ObjectSchema, Pattern, StringSchema};
use super::{RootSchema, Schema, SchemaType};
use crate::error::{SchemaError, SchemaResult};

impl RootSchema {
    /// Load a root schema from a parsed JSON value.
    ///
    /// The root must describe an object; a document root is always a table.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use tomlvet_validation::RootSchema;
    ///
    /// let schema = RootSchema::from_value(&json!({
    ///     "title": "Server configuration",
    ///     "type": "object",
    ///     "properties": {
    ///         "host": { "type": "string" },
    ///         "port": { "type": "integer", "minimum": 0, "maximum": 65536 }
    ///     },
    ///     "additionalProperties": false
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(schema.title.as_deref(), Some("Server configuration"));
    /// assert_eq!(schema.object.properties.len(), 2);
    /// assert!(!schema.object.additional_properties);
    /// ```
    pub fn from_value(value: &Value) -> SchemaResult<RootSchema> {
        let title = get_string(value, "title", "")?;
        let description = get_string(value, "description", "")?;

        match Schema::from_value(value)? {
            Schema::Object(object) => Ok(RootSchema {
                title,
                description,
                object,
            }),
            other => Err(SchemaError::InvalidStructure {
                message: format!(
                    "Root schema must have type \"object\", got \"{}\"",
                    other.type_name()
                ),
                path: error_path(""),
            }),
        }
    }

    /// Load a root schema from JSON text.
    pub fn from_json_str(json: &str) -> SchemaResult<RootSchema> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }
}

impl Schema {
    /// Parse a schema node from a parsed JSON value.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use tomlvet_validation::Schema;
    ///
    /// let schema = Schema::from_value(&json!({
    ///     "type": "string",
    ///     "pattern": "^[a-z]+$"
    /// }))
    /// .unwrap();
    /// assert_eq!(schema.type_name(), "string");
    /// ```
    pub fn from_value(value: &Value) -> SchemaResult<Schema> {
        Self::from_value_at(value, "")
    }

    /// Parse a schema node, tracking the dotted path for error messages.
    pub(super) fn from_value_at(value: &Value, path: &str) -> SchemaResult<Schema> {
        if !value.is_object() {
            return Err(SchemaError::InvalidStructure {
                message: format!("Expected schema object, got {}", json_kind(value)),
                path: error_path(path),
            });
        }

        let type_tag =
            get_string(value, "type", path)?.ok_or_else(|| SchemaError::MissingField {
                field: "type".to_string(),
                path: error_path(path),
            })?;

        match type_tag.as_str() {
            "object" => parse_object_schema(value, path),
            "array" => parse_array_schema(value, path),
            "string" => parse_string_schema(value, path),
            "number" => parse_numeric_schema(value, path, SchemaType::Number),
            "integer" => parse_numeric_schema(value, path, SchemaType::Integer),
            "boolean" => Ok(Schema::Boolean),
            _ => Err(SchemaError::InvalidType(type_tag)),
        }
    }
}

// Type-specific parsers

fn parse_object_schema(value: &Value, path: &str) -> SchemaResult<Schema> {
    let mut properties = HashMap::new();
    if let Some(props) = get_object(value, "properties", path)? {
        let props_path = join_path(path, "properties");
        for (key, property_value) in props {
            let property_path = join_path(&props_path, key);
            let schema = Schema::from_value_at(property_value, &property_path)?;
            properties.insert(key.clone(), schema);
        }
    }

    // Undeclared keys are tolerated unless the schema opts out
    let additional_properties = get_bool(value, "additionalProperties", path)?.unwrap_or(true);

    Ok(Schema::Object(ObjectSchema {
        properties,
        additional_properties,
    }))
}

fn parse_array_schema(value: &Value, path: &str) -> SchemaResult<Schema> {
    let items_value = value
        .get("items")
        .ok_or_else(|| SchemaError::MissingField {
            field: "items".to_string(),
            path: error_path(path),
        })?;
    let items = Schema::from_value_at(items_value, &join_path(path, "items"))?;

    Ok(Schema::Array(ArraySchema {
        items: Box::new(items),
    }))
}

fn parse_string_schema(value: &Value, path: &str) -> SchemaResult<Schema> {
    let pattern = match get_string(value, "pattern", path)? {
        Some(source) => {
            let compiled =
                Pattern::new(&source).map_err(|error| SchemaError::InvalidPattern {
                    pattern: source,
                    error,
                })?;
            Some(compiled)
        }
        None => None,
    };

    Ok(Schema::String(StringSchema { pattern }))
}

fn parse_numeric_schema(value: &Value, path: &str, schema_type: SchemaType) -> SchemaResult<Schema> {
    let minimum = get_number(value, "minimum", path)?;
    let maximum = get_number(value, "maximum", path)?;

    Ok(Schema::Numeric(NumericSchema {
        schema_type,
        minimum,
        maximum,
    }))
}

/// Human-readable kind name for a JSON value.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
