use serde_json::json;
use tomlvet_document::{SourceInfo, TableEntry, TableNode, TomlNode};
use tomlvet_error_reporting::{Severity, get_code_info};
use tomlvet_validation::{RootSchema, Violation, validate};

fn at(offset: usize, line: usize, col: usize, len: usize) -> SourceInfo {
    SourceInfo::new(offset, line, col, len).with_file("config.toml")
}

/// Build the document tree for:
///
/// ```toml
/// name = "my-service"
/// port = 70000
/// retry_delay = 1.5
/// verbose = "yes"
///
/// [[upstreams]]
/// host = "a.internal"
///
/// [[upstreams]]
/// host = "b.internal"
/// weight = -1
/// region = "eu"
/// ```
fn sample_document() -> TableNode {
    let upstream_a = TableNode::new(
        vec![TableEntry::new(
            "host",
            at(86, 7, 1, 4),
            TomlNode::new_key_value(
                TomlNode::new_string("a.internal", at(93, 7, 8, 12)),
                at(86, 7, 1, 19),
            ),
        )],
        at(72, 6, 1, 33),
    );
    let upstream_b = TableNode::new(
        vec![
            TableEntry::new(
                "host",
                at(121, 10, 1, 4),
                TomlNode::new_key_value(
                    TomlNode::new_string("b.internal", at(128, 10, 8, 12)),
                    at(121, 10, 1, 19),
                ),
            ),
            TableEntry::new(
                "weight",
                at(141, 11, 1, 6),
                TomlNode::new_key_value(
                    TomlNode::new_integer(-1, at(150, 11, 10, 2)),
                    at(141, 11, 1, 11),
                ),
            ),
            TableEntry::new(
                "region",
                at(153, 12, 1, 6),
                TomlNode::new_key_value(
                    TomlNode::new_string("eu", at(162, 12, 10, 4)),
                    at(153, 12, 1, 13),
                ),
            ),
        ],
        at(107, 9, 1, 59),
    );

    TableNode::new(
        vec![
            TableEntry::new(
                "name",
                at(0, 1, 1, 4),
                TomlNode::new_key_value(
                    TomlNode::new_string("my-service", at(7, 1, 8, 12)),
                    at(0, 1, 1, 19),
                ),
            ),
            TableEntry::new(
                "port",
                at(20, 2, 1, 4),
                TomlNode::new_key_value(
                    TomlNode::new_integer(70000, at(27, 2, 8, 5)),
                    at(20, 2, 1, 12),
                ),
            ),
            TableEntry::new(
                "retry_delay",
                at(33, 3, 1, 11),
                TomlNode::new_key_value(
                    TomlNode::new_float(1.5, at(47, 3, 15, 3)),
                    at(33, 3, 1, 17),
                ),
            ),
            TableEntry::new(
                "verbose",
                at(51, 4, 1, 7),
                TomlNode::new_key_value(
                    TomlNode::new_string("yes", at(61, 4, 11, 5)),
                    at(51, 4, 1, 15),
                ),
            ),
            TableEntry::new(
                "upstreams",
                at(72, 6, 1, 9),
                TomlNode::new_table_array(vec![upstream_a, upstream_b], at(72, 6, 1, 94)),
            ),
        ],
        SourceInfo::default().with_file("config.toml"),
    )
}

fn sample_schema() -> RootSchema {
    RootSchema::from_value(&json!({
        "title": "Service configuration",
        "type": "object",
        "properties": {
            "name": { "type": "string", "pattern": "^[a-z][a-z0-9-]*$" },
            "port": { "type": "integer", "minimum": 0, "maximum": 65536 },
            "retry_delay": { "type": "number", "minimum": 0 },
            "verbose": { "type": "boolean" },
            "upstreams": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "host": { "type": "string" },
                        "weight": { "type": "integer", "minimum": 0 }
                    },
                    "additionalProperties": false
                }
            }
        },
        "additionalProperties": false
    }))
    .unwrap()
}

/// Test a full document against a full schema, surfacing every problem in
/// one pass
#[test]
fn test_validate_sample_document() {
    let diagnostics = validate(&sample_schema(), &sample_document());

    let mut codes = diagnostics.codes();
    codes.sort_unstable();
    assert_eq!(codes, vec!["TVE0001", "TVE0002", "TVE0004", "TVE0005"]);

    // port = 70000 breaks its maximum
    let port = diagnostics.iter().find(|d| d.code == "TVE0005").unwrap();
    assert_eq!(port.message, "Key \"port\" value can't be higher than 65536");
    assert_eq!(port.location.line, 2);

    // verbose = "yes" is a string where a boolean is declared
    let verbose = diagnostics.iter().find(|d| d.code == "TVE0002").unwrap();
    assert_eq!(
        verbose.message,
        "Key \"verbose\" expects boolean, found string"
    );
    assert_eq!(verbose.location.line, 4);

    // weight = -1 in the second upstream breaks its minimum
    let weight = diagnostics.iter().find(|d| d.code == "TVE0004").unwrap();
    assert_eq!(weight.message, "Key \"weight\" value can't be lower than 0");
    assert_eq!(weight.location.line, 11);

    // region is undeclared in the closed upstream item schema
    let region = diagnostics.iter().find(|d| d.code == "TVE0001").unwrap();
    assert_eq!(region.message, "Unexpected Property \"region\"");
    assert_eq!(region.severity, Severity::Warning);
    assert_eq!(region.location.line, 12);
}

/// Test that the set-level accessors reflect the mixed severities
#[test]
fn test_diagnostic_set_accessors() {
    let diagnostics = validate(&sample_schema(), &sample_document());

    assert_eq!(diagnostics.len(), 4);
    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.max_severity(), Some(Severity::Error));
}

/// Test the one-line display form of an emitted diagnostic
#[test]
fn test_diagnostic_display_rendering() {
    let diagnostics = validate(&sample_schema(), &sample_document());
    let port = diagnostics.iter().find(|d| d.code == "TVE0005").unwrap();

    assert_eq!(
        port.to_string(),
        "error[TVE0005] config.toml:2:8: Key \"port\" value can't be higher than 65536"
    );
}

/// Test the JSON form of an emitted diagnostic
#[test]
fn test_diagnostic_json_rendering() {
    let diagnostics = validate(&sample_schema(), &sample_document());
    let region = diagnostics.iter().find(|d| d.code == "TVE0001").unwrap();

    let json = region.to_json();
    assert_eq!(json["code"], "TVE0001");
    assert_eq!(json["severity"], "warning");
    assert_eq!(json["template"], "warn.unexpected.property");
    assert_eq!(json["location"]["file"], "config.toml");
    assert_eq!(json["location"]["line"], 12);
}

/// Test that every violation kind agrees with the embedded code catalog
#[test]
fn test_violations_match_catalog() {
    let violations = vec![
        Violation::UnexpectedProperty {
            key: "x".to_string(),
        },
        Violation::TypeMismatch {
            key: "x".to_string(),
            expected: tomlvet_validation::SchemaType::String,
            found: "integer".to_string(),
        },
        Violation::PatternMismatch {
            key: "x".to_string(),
            pattern: "^a$".to_string(),
        },
        Violation::BelowMinimum {
            key: "x".to_string(),
            minimum: 0.0,
        },
        Violation::AboveMaximum {
            key: "x".to_string(),
            maximum: 1.0,
        },
    ];

    for violation in violations {
        let info = get_code_info(violation.code())
            .unwrap_or_else(|| panic!("code {} missing from catalog", violation.code()));
        assert_eq!(info.severity, violation.severity(), "{}", violation.code());
        assert_eq!(info.template, violation.template(), "{}", violation.code());
    }
}

/// Test a document that satisfies its schema completely
#[test]
fn test_conforming_document_yields_nothing() {
    let schema = sample_schema();
    let upstream = TableNode::new(
        vec![
            TableEntry::new(
                "host",
                at(0, 1, 1, 4),
                TomlNode::new_string("a.internal", at(7, 1, 8, 12)),
            ),
            TableEntry::new(
                "weight",
                at(20, 2, 1, 6),
                TomlNode::new_integer(10, at(29, 2, 10, 2)),
            ),
        ],
        at(0, 1, 1, 31),
    );
    let document = TableNode::new(
        vec![
            TableEntry::new(
                "name",
                at(0, 1, 1, 4),
                TomlNode::new_string("my-service", at(7, 1, 8, 12)),
            ),
            TableEntry::new(
                "port",
                at(20, 2, 1, 4),
                TomlNode::new_integer(8080, at(27, 2, 8, 4)),
            ),
            TableEntry::new(
                "upstreams",
                at(33, 4, 1, 9),
                TomlNode::new_table_array(vec![upstream], at(33, 4, 1, 40)),
            ),
        ],
        SourceInfo::default(),
    );

    let diagnostics = validate(&schema, &document);
    assert!(diagnostics.is_empty(), "got: {:?}", diagnostics.codes());
}

/// Test that one loaded schema can serve concurrent validations
#[test]
fn test_shared_schema_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let schema = Arc::new(sample_schema());
    let document = Arc::new(sample_document());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schema = Arc::clone(&schema);
            let document = Arc::clone(&document);
            thread::spawn(move || {
                let diagnostics = validate(&schema, &document);
                let mut codes: Vec<String> =
                    diagnostics.iter().map(|d| d.code.clone()).collect();
                codes.sort_unstable();
                codes
            })
        })
        .collect();

    let baseline = {
        let diagnostics = validate(&schema, &document);
        let mut codes: Vec<String> = diagnostics.iter().map(|d| d.code.clone()).collect();
        codes.sort_unstable();
        codes
    };

    for handle in handles {
        assert_eq!(handle.join().unwrap(), baseline);
    }
}
