// Document validation engine

use crate::error::Violation;
use crate::schema::{ArraySchema, NumericSchema, ObjectSchema, RootSchema, Schema, StringSchema};
use tomlvet_document::{SourceInfo, StringValueNode, TableArrayNode, TableNode, TomlNode};
use tomlvet_error_reporting::DiagnosticSet;

/// Validates a document tree against a root schema.
///
/// The traversal walks schema and document in lock-step, comparing the
/// expected schema kind against each node's kind and running the type
/// specific checks where they agree. Every violation becomes one diagnostic
/// in the returned set; the traversal continues past violations so a single
/// pass surfaces every problem in the document. Malformed documents never
/// abort validation.
///
/// The schema and document are read-only and may be shared across
/// concurrent validations; all traversal state lives in the call itself.
pub fn validate(schema: &RootSchema, document: &TableNode) -> DiagnosticSet {
    let mut diagnostics = DiagnosticSet::new();
    validate_table(document, &schema.object, &mut diagnostics);
    diagnostics
}

/// Validate one node against its expected schema.
///
/// `key` is the table key under which this node appeared; diagnostics
/// produced here name it.
fn validate_node(node: &TomlNode, schema: &Schema, key: &str, diagnostics: &mut DiagnosticSet) {
    match (node, schema) {
        // The entry wrapper never carries a schema comparison of its own
        (TomlNode::KeyValue(kv), _) => validate_node(&kv.value, schema, key, diagnostics),
        (TomlNode::Table(table), Schema::Object(object)) => {
            validate_table(table, object, diagnostics);
        }
        (TomlNode::TableArray(array), Schema::Array(array_schema)) => {
            validate_table_array(array, array_schema, key, diagnostics);
        }
        (TomlNode::String(value), Schema::String(string_schema)) => {
            check_string(value, string_schema, key, diagnostics);
        }
        (TomlNode::Integer(value), Schema::Numeric(numeric)) => {
            check_bounds(value.value as f64, numeric, key, &value.source_info, diagnostics);
        }
        (TomlNode::Float(value), Schema::Numeric(numeric)) => {
            check_bounds(value.value, numeric, key, &value.source_info, diagnostics);
        }
        (TomlNode::Boolean(_), Schema::Boolean) => {}
        _ => {
            // Kind disagreement: report once and skip the deeper checks
            let violation = Violation::TypeMismatch {
                key: key.to_string(),
                expected: schema.schema_type(),
                found: node.kind_name().to_string(),
            };
            diagnostics.push(violation.into_diagnostic(node.source_info().clone()));
        }
    }
}

/// Validate the entries of a table against an object schema.
fn validate_table(table: &TableNode, schema: &ObjectSchema, diagnostics: &mut DiagnosticSet) {
    for entry in table.entries() {
        match schema.properties.get(&entry.key) {
            Some(property_schema) => {
                validate_node(&entry.value, property_schema, &entry.key, diagnostics);
            }
            None => {
                if !schema.additional_properties {
                    let violation = Violation::UnexpectedProperty {
                        key: entry.key.clone(),
                    };
                    diagnostics.push(violation.into_diagnostic(entry.value.source_info().clone()));
                }
                // An open object accepts the key with nothing to check it
                // against
            }
        }
    }
}

/// Validate every element of an array of tables against the uniform item
/// schema, keeping the array's own key as the current key.
fn validate_table_array(
    array: &TableArrayNode,
    schema: &ArraySchema,
    key: &str,
    diagnostics: &mut DiagnosticSet,
) {
    for element in array.elements() {
        match schema.items.as_ref() {
            Schema::Object(object) => validate_table(element, object, diagnostics),
            items => {
                // Elements are tables by construction, so a non-object item
                // schema can never match
                let violation = Violation::TypeMismatch {
                    key: key.to_string(),
                    expected: items.schema_type(),
                    found: "object".to_string(),
                };
                diagnostics.push(violation.into_diagnostic(element.source_info.clone()));
            }
        }
    }
}

/// Check a string leaf against its pattern constraint, if any.
fn check_string(
    node: &StringValueNode,
    schema: &StringSchema,
    key: &str,
    diagnostics: &mut DiagnosticSet,
) {
    if let Some(pattern) = &schema.pattern
        && !pattern.is_full_match(&node.value)
    {
        let violation = Violation::PatternMismatch {
            key: key.to_string(),
            pattern: pattern.as_str().to_string(),
        };
        diagnostics.push(violation.into_diagnostic(node.source_info.clone()));
    }
}

/// Check a numeric leaf against its declared bounds.
///
/// Both bounds are exclusive: a value equal to either bound is a violation.
/// The checks run independently, so a misconfigured schema with
/// `minimum >= maximum` can produce both diagnostics for one value.
fn check_bounds(
    value: f64,
    schema: &NumericSchema,
    key: &str,
    location: &SourceInfo,
    diagnostics: &mut DiagnosticSet,
) {
    if let Some(maximum) = schema.maximum
        && value >= maximum
    {
        let violation = Violation::AboveMaximum {
            key: key.to_string(),
            maximum,
        };
        diagnostics.push(violation.into_diagnostic(location.clone()));
    }
    if let Some(minimum) = schema.minimum
        && value <= minimum
    {
        let violation = Violation::BelowMinimum {
            key: key.to_string(),
            minimum,
        };
        diagnostics.push(violation.into_diagnostic(location.clone()));
    }
}
