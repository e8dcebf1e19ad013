//! Diagnostic code catalog and lookup.
//!
//! This module provides access to the centralized diagnostic catalog, which
//! maps diagnostic codes (like "TVE0002") to their metadata (severity,
//! message template identifier, title).

use crate::Severity;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for a diagnostic code.
///
/// Each entry in the catalog describes one diagnostic code: the severity it
/// is always reported at, the identifier of the message template it renders
/// from, and a short title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeInfo {
    /// Severity this code is always reported at
    pub severity: Severity,

    /// Message template identifier (e.g., "error.invalid.type")
    pub template: String,

    /// Short title for the diagnostic
    pub title: String,
}

/// Global diagnostic catalog, loaded lazily from JSON at compile time.
///
/// The catalog is loaded from `diagnostic_catalog.json` using
/// `include_str!()`, which embeds the JSON at compile time. This means no
/// runtime file I/O.
///
/// # Panics
///
/// Panics if the embedded JSON is invalid. This should only happen during
/// development if someone manually edits the catalog incorrectly.
pub static DIAGNOSTIC_CATALOG: Lazy<HashMap<String, CodeInfo>> = Lazy::new(|| {
    let json_data = include_str!("../diagnostic_catalog.json");
    serde_json::from_str(json_data).expect("Invalid diagnostic catalog JSON - this is a bug in tomlvet")
});

/// Look up diagnostic code information.
///
/// Returns `None` if the code is not found in the catalog.
///
/// # Example
///
/// ```
/// use tomlvet_error_reporting::catalog::get_code_info;
///
/// if let Some(info) = get_code_info("TVE0002") {
///     println!("{}: {}", info.title, info.template);
/// }
/// ```
pub fn get_code_info(code: &str) -> Option<&CodeInfo> {
    DIAGNOSTIC_CATALOG.get(code)
}

/// Get the severity a diagnostic code is reported at.
///
/// Returns `None` if the code is not found.
///
/// # Example
///
/// ```
/// use tomlvet_error_reporting::catalog::get_severity;
/// use tomlvet_error_reporting::Severity;
///
/// assert_eq!(get_severity("TVE0001"), Some(Severity::Warning));
/// ```
pub fn get_severity(code: &str) -> Option<Severity> {
    DIAGNOSTIC_CATALOG.get(code).map(|info| info.severity)
}

/// Get the message template identifier for a diagnostic code.
///
/// Returns `None` if the code is not found.
///
/// # Example
///
/// ```
/// use tomlvet_error_reporting::catalog::get_template;
///
/// assert_eq!(get_template("TVE0003"), Some("error.regex.mismatch"));
/// ```
pub fn get_template(code: &str) -> Option<&str> {
    DIAGNOSTIC_CATALOG.get(code).map(|info| info.template.as_str())
}
