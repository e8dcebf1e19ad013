//! # tomlvet-document
//!
//! TOML document tree with source location tracking.
//!
//! This crate provides `TomlNode`, a tree of parsed TOML values where every
//! node carries a `SourceInfo` describing where it came from. This enables
//! precise diagnostic attribution when a document is checked against a schema.
//!
//! ## Design
//!
//! The tree is a closed sum type: tables, arrays of tables, key-value entries
//! and the four scalar leaves are enum variants, so consumers dispatch with a
//! single exhaustive `match` instead of a visitor. Nodes are owned, immutable
//! payloads; there are no lifetime parameters and no interior mutability.
//!
//! This crate does not parse TOML text. A parser (or a test helper) builds the
//! tree through the `TomlNode::new_*` constructors.
//!
//! ## Example
//!
//! ```rust
//! use tomlvet_document::{SourceInfo, TableEntry, TableNode, TomlNode};
//!
//! let port = TomlNode::new_integer(8080, SourceInfo::default());
//! let table = TableNode::new(
//!     vec![TableEntry::new("port", SourceInfo::default(), port)],
//!     SourceInfo::default(),
//! );
//! assert!(table.get("port").is_some());
//! ```

mod node;
mod source_info;

pub use node::{
    BooleanValueNode, FloatValueNode, IntegerValueNode, KeyValueNode, StringValueNode, TableArrayNode,
    TableEntry, TableNode, TomlNode,
};
pub use source_info::SourceInfo;
