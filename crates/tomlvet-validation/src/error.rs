// Error and violation types for schema validation

use crate::schema::SchemaType;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tomlvet_document::SourceInfo;
use tomlvet_error_reporting::{Diagnostic, Severity};

/// Errors that can occur while loading a schema from its JSON form.
///
/// These are hard failures of the schema itself, not of a validated
/// document; a document can never produce a `SchemaError`.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Unrecognized schema type tag
    #[error("Invalid schema type: {0}")]
    InvalidType(String),

    /// Schema structure does not have the expected shape
    #[error("Invalid schema structure: {message} (at {path})")]
    InvalidStructure { message: String, path: String },

    /// Missing required schema field
    #[error("Missing required field '{field}' (at {path})")]
    MissingField { field: String, path: String },

    /// Pattern that does not compile as a regular expression
    #[error("Invalid pattern '{pattern}': {error}")]
    InvalidPattern {
        pattern: String,
        #[source]
        error: regex::Error,
    },

    /// Malformed schema JSON
    #[error("Invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for schema loading operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Structured violation kinds produced by validation.
///
/// A violation is where a document disagrees with its schema. Violations are
/// not errors in the `std::error::Error` sense: producing them is the normal
/// outcome of a validation pass, and each one becomes a `Diagnostic` via
/// [`Violation::into_diagnostic`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Violation {
    /// Node kind does not match the expected schema type
    TypeMismatch {
        key: String,
        expected: SchemaType,
        found: String,
    },

    /// Undeclared property under a closed object schema
    UnexpectedProperty { key: String },

    /// String value fails its full-match pattern
    PatternMismatch { key: String, pattern: String },

    /// Numeric value at or below the declared minimum
    BelowMinimum { key: String, minimum: f64 },

    /// Numeric value at or above the declared maximum
    AboveMaximum { key: String, maximum: f64 },
}

impl Violation {
    /// Get the diagnostic code for this violation kind.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::UnexpectedProperty { .. } => "TVE0001",
            Violation::TypeMismatch { .. } => "TVE0002",
            Violation::PatternMismatch { .. } => "TVE0003",
            Violation::BelowMinimum { .. } => "TVE0004",
            Violation::AboveMaximum { .. } => "TVE0005",
        }
    }

    /// Get the severity this violation is reported at.
    ///
    /// Only unexpected properties are warnings; everything else invalidates
    /// the document.
    pub fn severity(&self) -> Severity {
        match self {
            Violation::UnexpectedProperty { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Get the message template identifier for this violation kind.
    pub fn template(&self) -> &'static str {
        match self {
            Violation::UnexpectedProperty { .. } => "warn.unexpected.property",
            Violation::TypeMismatch { .. } => "error.invalid.type",
            Violation::PatternMismatch { .. } => "error.regex.mismatch",
            Violation::BelowMinimum { .. } => "error.minimum.value.deceed",
            Violation::AboveMaximum { .. } => "error.maximum.value.exceed",
        }
    }

    /// Format a human-readable message from this violation.
    pub fn message(&self) -> String {
        match self {
            Violation::TypeMismatch {
                key,
                expected,
                found,
            } => {
                format!("Key \"{}\" expects {}, found {}", key, expected, found)
            }
            Violation::UnexpectedProperty { key } => {
                format!("Unexpected Property \"{}\"", key)
            }
            Violation::PatternMismatch { key, pattern } => {
                format!(
                    "Key \"{}\" value does not match the Regex provided in Schema {}",
                    key, pattern
                )
            }
            Violation::BelowMinimum { key, minimum } => {
                format!("Key \"{}\" value can't be lower than {}", key, minimum)
            }
            Violation::AboveMaximum { key, maximum } => {
                format!("Key \"{}\" value can't be higher than {}", key, maximum)
            }
        }
    }

    /// Convert into a finished diagnostic at the given location.
    pub fn into_diagnostic(self, location: SourceInfo) -> Diagnostic {
        Diagnostic::new(
            self.code(),
            self.severity(),
            self.template(),
            self.message(),
            location,
        )
    }
}
