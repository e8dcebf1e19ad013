//! TOML document tree.

use crate::SourceInfo;

/// A node in a parsed TOML document.
///
/// This is a closed sum type over everything a TOML document can contain at
/// the structural level: tables, arrays of tables, `key = value` entries and
/// the four scalar leaves. Every variant carries its own `SourceInfo`.
///
/// `KeyValue` is a transient wrapper around the value of a `key = value`
/// entry. It exists so a table entry's span (the whole line) is distinct from
/// the span of the literal on its right-hand side; consumers that only care
/// about the value unwrap it immediately.
#[derive(Debug, Clone, PartialEq)]
pub enum TomlNode {
    /// A table of key-value entries
    Table(TableNode),
    /// An array of tables (`[[name]]` sections)
    TableArray(TableArrayNode),
    /// A `key = value` entry wrapping its right-hand side
    KeyValue(KeyValueNode),
    /// A string literal
    String(StringValueNode),
    /// An integer literal
    Integer(IntegerValueNode),
    /// A float literal
    Float(FloatValueNode),
    /// A boolean literal
    Boolean(BooleanValueNode),
}

/// A table: key-value entries with unique keys.
///
/// Iteration order follows insertion order, but no consumer may attach
/// meaning to it; key uniqueness is the parser's contract.
#[derive(Debug, Clone, PartialEq)]
pub struct TableNode {
    entries: Vec<TableEntry>,

    /// Source location of the whole table
    pub source_info: SourceInfo,
}

/// One entry of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    /// The entry's key
    pub key: String,

    /// Source location of just the key
    pub key_info: SourceInfo,

    /// The entry's value
    pub value: TomlNode,
}

/// An array of tables: an ordered sequence of `TableNode`.
///
/// Elements are tables by construction; TOML `[[name]]` sections cannot hold
/// anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct TableArrayNode {
    elements: Vec<TableNode>,

    /// Source location of the whole array
    pub source_info: SourceInfo,
}

/// The value side of a `key = value` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueNode {
    /// The wrapped value
    pub value: Box<TomlNode>,

    /// Source location of the whole `key = value` entry
    pub source_info: SourceInfo,
}

/// A string leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct StringValueNode {
    pub value: String,
    pub source_info: SourceInfo,
}

/// An integer leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerValueNode {
    pub value: i64,
    pub source_info: SourceInfo,
}

/// A float leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatValueNode {
    pub value: f64,
    pub source_info: SourceInfo,
}

/// A boolean leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanValueNode {
    pub value: bool,
    pub source_info: SourceInfo,
}

impl TomlNode {
    /// Create a table node.
    pub fn new_table(entries: Vec<TableEntry>, source_info: SourceInfo) -> Self {
        TomlNode::Table(TableNode::new(entries, source_info))
    }

    /// Create an array-of-tables node.
    pub fn new_table_array(elements: Vec<TableNode>, source_info: SourceInfo) -> Self {
        TomlNode::TableArray(TableArrayNode::new(elements, source_info))
    }

    /// Create a `key = value` wrapper around a value node.
    pub fn new_key_value(value: TomlNode, source_info: SourceInfo) -> Self {
        TomlNode::KeyValue(KeyValueNode {
            value: Box::new(value),
            source_info,
        })
    }

    /// Create a string leaf.
    pub fn new_string(value: impl Into<String>, source_info: SourceInfo) -> Self {
        TomlNode::String(StringValueNode {
            value: value.into(),
            source_info,
        })
    }

    /// Create an integer leaf.
    pub fn new_integer(value: i64, source_info: SourceInfo) -> Self {
        TomlNode::Integer(IntegerValueNode { value, source_info })
    }

    /// Create a float leaf.
    pub fn new_float(value: f64, source_info: SourceInfo) -> Self {
        TomlNode::Float(FloatValueNode { value, source_info })
    }

    /// Create a boolean leaf.
    pub fn new_boolean(value: bool, source_info: SourceInfo) -> Self {
        TomlNode::Boolean(BooleanValueNode { value, source_info })
    }

    /// Source location of this node.
    pub fn source_info(&self) -> &SourceInfo {
        match self {
            TomlNode::Table(t) => &t.source_info,
            TomlNode::TableArray(a) => &a.source_info,
            TomlNode::KeyValue(kv) => &kv.source_info,
            TomlNode::String(s) => &s.source_info,
            TomlNode::Integer(i) => &i.source_info,
            TomlNode::Float(f) => &f.source_info,
            TomlNode::Boolean(b) => &b.source_info,
        }
    }

    /// Human-readable kind name, as used in diagnostic messages.
    ///
    /// `KeyValue` is transparent and reports the kind of the wrapped value.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TomlNode::Table(_) => "object",
            TomlNode::TableArray(_) => "array",
            TomlNode::KeyValue(kv) => kv.value.kind_name(),
            TomlNode::String(_) => "string",
            TomlNode::Integer(_) => "integer",
            TomlNode::Float(_) => "number",
            TomlNode::Boolean(_) => "boolean",
        }
    }

    /// Check if this is a table.
    pub fn is_table(&self) -> bool {
        matches!(self, TomlNode::Table(_))
    }

    /// Check if this is an array of tables.
    pub fn is_table_array(&self) -> bool {
        matches!(self, TomlNode::TableArray(_))
    }

    /// Check if this is a `key = value` wrapper.
    pub fn is_key_value(&self) -> bool {
        matches!(self, TomlNode::KeyValue(_))
    }

    /// Check if this is a scalar leaf (string, integer, float or boolean).
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            TomlNode::String(_) | TomlNode::Integer(_) | TomlNode::Float(_) | TomlNode::Boolean(_)
        )
    }

    /// Get the table if this is a table.
    pub fn as_table(&self) -> Option<&TableNode> {
        match self {
            TomlNode::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Get the array of tables if this is one.
    pub fn as_table_array(&self) -> Option<&TableArrayNode> {
        match self {
            TomlNode::TableArray(a) => Some(a),
            _ => None,
        }
    }

    /// Get the string value if this is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TomlNode::String(s) => Some(&s.value),
            _ => None,
        }
    }

    /// Get the integer value if this is an integer leaf.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TomlNode::Integer(i) => Some(i.value),
            _ => None,
        }
    }

    /// Get the float value if this is a float leaf.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            TomlNode::Float(f) => Some(f.value),
            _ => None,
        }
    }

    /// Get the boolean value if this is a boolean leaf.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            TomlNode::Boolean(b) => Some(b.value),
            _ => None,
        }
    }

    /// Consume self and return the table if this is a table.
    pub fn into_table(self) -> Option<TableNode> {
        match self {
            TomlNode::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Consume self and return the array of tables if this is one.
    pub fn into_table_array(self) -> Option<TableArrayNode> {
        match self {
            TomlNode::TableArray(a) => Some(a),
            _ => None,
        }
    }
}

impl TableNode {
    /// Create a new table from its entries.
    pub fn new(entries: Vec<TableEntry>, source_info: SourceInfo) -> Self {
        Self {
            entries,
            source_info,
        }
    }

    /// The table's entries, in insertion order.
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Get an entry's value by key.
    pub fn get(&self, key: &str) -> Option<&TomlNode> {
        self.entries
            .iter()
            .find_map(|entry| (entry.key == key).then_some(&entry.value))
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TableEntry {
    /// Create a new table entry.
    pub fn new(key: impl Into<String>, key_info: SourceInfo, value: TomlNode) -> Self {
        Self {
            key: key.into(),
            key_info,
            value,
        }
    }
}

impl TableArrayNode {
    /// Create a new array of tables from its elements.
    pub fn new(elements: Vec<TableNode>, source_info: SourceInfo) -> Self {
        Self {
            elements,
            source_info,
        }
    }

    /// The array's elements, in document order.
    pub fn elements(&self) -> &[TableNode] {
        &self.elements
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl KeyValueNode {
    /// Create a new `key = value` wrapper.
    pub fn new(value: TomlNode, source_info: SourceInfo) -> Self {
        Self {
            value: Box::new(value),
            source_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: usize) -> SourceInfo {
        SourceInfo::new(offset, 1, offset + 1, 1)
    }

    #[test]
    fn test_scalar_creation() {
        let node = TomlNode::new_string("hello", at(4));
        assert!(node.is_scalar());
        assert!(!node.is_table());
        assert_eq!(node.as_str(), Some("hello"));
        assert_eq!(node.kind_name(), "string");
        assert_eq!(node.source_info().offset, 4);
    }

    #[test]
    fn test_scalar_kind_names() {
        assert_eq!(TomlNode::new_integer(1, at(0)).kind_name(), "integer");
        assert_eq!(TomlNode::new_float(1.5, at(0)).kind_name(), "number");
        assert_eq!(TomlNode::new_boolean(true, at(0)).kind_name(), "boolean");
    }

    #[test]
    fn test_table_creation_and_lookup() {
        let table = TableNode::new(
            vec![
                TableEntry::new("name", at(0), TomlNode::new_string("svc", at(7))),
                TableEntry::new("port", at(12), TomlNode::new_integer(8080, at(19))),
            ],
            SourceInfo::default(),
        );

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.get("name").and_then(TomlNode::as_str), Some("svc"));
        assert_eq!(table.get("port").and_then(TomlNode::as_integer), Some(8080));
        assert!(table.get("missing").is_none());
    }

    #[test]
    fn test_table_array_elements() {
        let first = TableNode::new(vec![], at(0));
        let second = TableNode::new(
            vec![TableEntry::new("x", at(10), TomlNode::new_integer(1, at(14)))],
            at(10),
        );
        let node = TomlNode::new_table_array(vec![first, second], SourceInfo::default());

        assert!(node.is_table_array());
        assert_eq!(node.kind_name(), "array");
        let array = node.as_table_array().unwrap();
        assert_eq!(array.len(), 2);
        assert!(array.elements()[0].is_empty());
        assert_eq!(array.elements()[1].len(), 1);
    }

    #[test]
    fn test_key_value_is_transparent() {
        let inner = TomlNode::new_integer(42, at(8));
        let node = TomlNode::new_key_value(inner, at(0));

        assert!(node.is_key_value());
        // kind reports the wrapped value, the span reports the whole entry
        assert_eq!(node.kind_name(), "integer");
        assert_eq!(node.source_info().offset, 0);
        if let TomlNode::KeyValue(kv) = &node {
            assert_eq!(kv.value.as_integer(), Some(42));
        } else {
            panic!("Expected KeyValue node");
        }
    }

    #[test]
    fn test_into_table() {
        let node = TomlNode::new_table(vec![], SourceInfo::default());
        let table = node.into_table().unwrap();
        assert!(table.is_empty());

        let node = TomlNode::new_boolean(true, SourceInfo::default());
        assert!(node.into_table().is_none());
    }
}
