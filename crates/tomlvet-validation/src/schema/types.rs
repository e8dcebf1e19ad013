//! Schema type definitions
//!
//! This module contains the schema struct definitions that represent the
//! different validation types of the restricted JSON Schema subset.

use regex::Regex;
use std::collections::HashMap;
use std::fmt;

use super::{Schema, SchemaType};

/// Object schema
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    /// Per-property schemas, keyed by property name
    pub properties: HashMap<String, Schema>,

    /// Whether keys without a declared property schema are tolerated
    pub additional_properties: bool,
}

/// Array-of-tables schema
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    /// The schema applied uniformly to every element
    pub items: Box<Schema>,
}

/// String schema
#[derive(Debug, Clone, PartialEq)]
pub struct StringSchema {
    /// Pattern the whole string value must match, if declared
    pub pattern: Option<Pattern>,
}

/// Numeric schema, covering both the `integer` and `number` type tags
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSchema {
    /// The declared tag, `SchemaType::Integer` or `SchemaType::Number`
    pub schema_type: SchemaType,

    /// Exclusive lower bound: values at or below it are violations
    pub minimum: Option<f64>,

    /// Exclusive upper bound: values at or above it are violations
    pub maximum: Option<f64>,
}

/// A compiled full-match regular expression constraint.
///
/// The pattern is compiled once at schema load time with implicit anchoring,
/// so matching asks "does the entire value fit" rather than "does the value
/// contain a fit". The original pattern source is kept for display in
/// diagnostics.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern with full-match anchoring.
    pub fn new(source: &str) -> Result<Pattern, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Pattern {
            source: source.to_string(),
            regex,
        })
    }

    /// The pattern as the schema author wrote it, without the anchoring.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Check whether the entire `text` matches the pattern.
    pub fn is_full_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

// Two patterns are the same constraint iff they were written the same way.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
