//! Diagnostic types and reporting for tomlvet.
//!
//! This crate defines the output side of validation: what a reported
//! violation looks like, which codes exist, and how they are shown to a
//! person or a machine.
//!
//! # Architecture
//!
//! - [`Diagnostic`]: one reported violation, with code, severity, template
//!   identifier, rendered message, and source location
//! - [`DiagnosticSet`]: the flat collection a validation pass returns
//! - [`catalog`]: the embedded catalog mapping codes to their metadata
//! - [`render_report`]: ariadne-based source snippets for terminal output
//!
//! # Design Decisions
//!
//! - **Diagnostics are facts, not errors**: producing them is the normal,
//!   successful outcome of validation, so none of these types implement
//!   `std::error::Error`
//! - **Messages are pre-rendered**: a `Diagnostic` carries its final message
//!   string; the template identifier records which form it was rendered from
//! - **Two output shapes**: a one-line `Display` form for logs and a rich
//!   ariadne form when the source text is at hand
//!
//! # Example
//!
//! ```
//! use tomlvet_document::SourceInfo;
//! use tomlvet_error_reporting::{Diagnostic, DiagnosticSet, Severity};
//!
//! let mut diagnostics = DiagnosticSet::new();
//! diagnostics.push(Diagnostic::new(
//!     "TVE0001",
//!     Severity::Warning,
//!     "warn.unexpected.property",
//!     "Unexpected Property \"extra\"",
//!     SourceInfo::new(0, 3, 1, 9).with_file("config.toml"),
//! ));
//!
//! assert!(!diagnostics.has_errors());
//! assert_eq!(
//!     diagnostics.diagnostics()[0].to_string(),
//!     "warning[TVE0001] config.toml:3:1: Unexpected Property \"extra\""
//! );
//! ```

// Core diagnostic types
pub mod diagnostic;

// Diagnostic code catalog
pub mod catalog;

// Ariadne source-context rendering
pub mod render;

// Re-export main types for convenience
pub use catalog::{CodeInfo, DIAGNOSTIC_CATALOG, get_code_info, get_severity, get_template};
pub use diagnostic::{Diagnostic, DiagnosticSet, Severity};
pub use render::{render_all, render_report};
