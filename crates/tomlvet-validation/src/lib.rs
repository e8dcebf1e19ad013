//! Schema-guided validation for TOML document trees.
//!
//! This crate checks a parsed document tree from `tomlvet-document` against
//! a [`RootSchema`] loaded from a restricted JSON Schema dialect, and
//! reports every rule violation as a diagnostic in a
//! [`DiagnosticSet`](tomlvet_error_reporting::DiagnosticSet).
//!
//! Validation is a total function over well-formed inputs. Schema problems
//! (unknown type tags, missing `items`, unparseable patterns) surface as
//! [`SchemaError`] when the schema is loaded, so by the time [`validate`]
//! runs, every constraint it consults is known to be well-formed and the
//! run itself cannot fail. A document that matches nothing in the schema
//! produces diagnostics, never an error.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tomlvet_document::{SourceInfo, TableEntry, TableNode, TomlNode};
//! use tomlvet_validation::{validate, RootSchema};
//!
//! let schema = RootSchema::from_value(&json!({
//!     "type": "object",
//!     "properties": {
//!         "port": { "type": "integer", "minimum": 0, "maximum": 65536 }
//!     },
//!     "additionalProperties": false
//! }))?;
//!
//! let port = TomlNode::new_integer(70000, SourceInfo::new(7, 1, 8, 5));
//! let document = TableNode::new(
//!     vec![TableEntry::new("port", SourceInfo::new(0, 1, 1, 4), port)],
//!     SourceInfo::default(),
//! );
//!
//! let diagnostics = validate(&schema, &document);
//! assert_eq!(diagnostics.codes(), vec!["TVE0005"]);
//! # Ok::<(), tomlvet_validation::SchemaError>(())
//! ```

pub mod error;
pub mod schema;
pub mod validator;

pub use error::{SchemaError, SchemaResult, Violation};
pub use schema::{
    ArraySchema, NumericSchema, ObjectSchema, Pattern, RootSchema, Schema, SchemaType,
    StringSchema,
};
pub use validator::validate;
