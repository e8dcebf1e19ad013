// Schema types for document validation
//
// This module defines the schema type system used for validation: a
// restricted JSON Schema subset covering object/array/string/number/boolean
// types, nested properties, a uniform array item schema, string patterns,
// numeric bounds and an additional-properties policy.
//
// Schemas arrive in JSON wire form and are loaded with
// `RootSchema::from_value` (see the `loader` module); the loaded tree is
// immutable and can be shared freely across validations.

mod helpers;
mod loader;
mod types;

pub use types::{ArraySchema, NumericSchema, ObjectSchema, Pattern, StringSchema};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The recognized schema type tags.
///
/// `Number` and `Integer` are distinct tags that load into the same
/// [`NumericSchema`]; the declared tag is kept so diagnostics can name the
/// type the schema author wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
}

impl SchemaType {
    /// The tag as it appears in schema files and diagnostic messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The main schema enum representing all recognized schema kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Object schema with per-property schemas and an extras policy
    Object(ObjectSchema),
    /// Array-of-tables schema with a uniform element schema
    Array(ArraySchema),
    /// String schema with an optional full-match pattern
    String(StringSchema),
    /// Numeric schema, covering both integer and float values
    Numeric(NumericSchema),
    /// Boolean schema; the type match alone is the whole constraint
    Boolean,
}

impl Schema {
    /// The declared type tag of this schema.
    pub fn schema_type(&self) -> SchemaType {
        match self {
            Schema::Object(_) => SchemaType::Object,
            Schema::Array(_) => SchemaType::Array,
            Schema::String(_) => SchemaType::String,
            Schema::Numeric(s) => s.schema_type,
            Schema::Boolean => SchemaType::Boolean,
        }
    }

    /// Human-readable name of the declared type tag.
    pub fn type_name(&self) -> &'static str {
        self.schema_type().as_str()
    }
}

/// The entry-point schema for a whole document.
///
/// A document root is always a table, so the root schema always describes
/// an object; the loader rejects anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct RootSchema {
    /// Schema title, if the schema file declares one
    pub title: Option<String>,

    /// Schema description, if the schema file declares one
    pub description: Option<String>,

    /// The object schema for the document root table
    pub object: ObjectSchema,
}
