//! Core diagnostic types.
//!
//! This module defines `Severity`, `Diagnostic` and `DiagnosticSet`, the
//! output contract of a validation pass. A diagnostic is a finished fact: its
//! message is already rendered, its code and severity are stable, and its
//! location points at the offending node.

use serde::{Deserialize, Serialize};
use std::fmt;
use tomlvet_document::SourceInfo;

/// The severity of a diagnostic.
///
/// Variants are ordered so that `Error` compares greater than `Warning`;
/// `DiagnosticSet::max_severity` relies on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A problem that does not invalidate the document on its own
    Warning,
    /// A violation of the schema's constraints
    Error,
}

impl Severity {
    /// Lowercase name, as used in rendered output and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Check if this is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported violation.
///
/// Structure:
/// 1. **Code**: stable identifier (e.g. "TVE0002") for searchability
/// 2. **Severity**: error or warning
/// 3. **Template**: the message template identifier the code renders from
/// 4. **Message**: the rendered human-readable message
/// 5. **Location**: where in the document the violation occurred
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable diagnostic code (e.g. "TVE0001")
    pub code: String,

    /// The severity of this diagnostic
    pub severity: Severity,

    /// Message template identifier (e.g. "warn.unexpected.property")
    pub template: String,

    /// Rendered human-readable message
    pub message: String,

    /// Source location of the offending node
    pub location: SourceInfo,
}

impl Diagnostic {
    /// Create a new diagnostic with all fields specified.
    pub fn new(
        code: impl Into<String>,
        severity: Severity,
        template: impl Into<String>,
        message: impl Into<String>,
        location: SourceInfo,
    ) -> Self {
        Self {
            code: code.into(),
            severity,
            template: template.into(),
            message: message.into(),
            location,
        }
    }

    /// Render as a JSON value for machine consumption.
    ///
    /// # Example
    ///
    /// ```
    /// use tomlvet_document::SourceInfo;
    /// use tomlvet_error_reporting::{Diagnostic, Severity};
    ///
    /// let d = Diagnostic::new(
    ///     "TVE0001",
    ///     Severity::Warning,
    ///     "warn.unexpected.property",
    ///     "Unexpected Property \"extra\"",
    ///     SourceInfo::default(),
    /// );
    /// let json = d.to_json();
    /// assert_eq!(json["code"], "TVE0001");
    /// assert_eq!(json["severity"], "warning");
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::json;

        let mut obj = json!({
            "code": self.code,
            "severity": self.severity.as_str(),
            "template": self.template,
            "message": self.message,
            "location": {
                "offset": self.location.offset,
                "line": self.location.line,
                "col": self.location.col,
                "len": self.location.len,
            },
        });

        if let Some(file) = &self.location.file {
            obj["location"]["file"] = json!(file);
        }

        obj
    }
}

impl fmt::Display for Diagnostic {
    /// Render as `severity[code] file:line:col: message`.
    ///
    /// The location segment is omitted when no file name is attached.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location.file {
            Some(file) => write!(
                f,
                "{}[{}] {}:{}:{}: {}",
                self.severity, self.code, file, self.location.line, self.location.col, self.message
            ),
            None => write!(f, "{}[{}] {}", self.severity, self.code, self.message),
        }
    }
}

/// The flattened collection of diagnostics produced by one validation pass.
///
/// Diagnostics arrive in document-traversal order, but key iteration order is
/// not part of the contract; callers comparing two sets should compare them
/// as unordered collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticSet {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append every diagnostic of another set.
    pub fn extend(&mut self, other: DiagnosticSet) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// The collected diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterate over the diagnostics.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Check if any diagnostic is an error.
    ///
    /// Callers use this to decide whether warnings alone should fail a run.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// The highest severity present, or `None` for an empty set.
    pub fn max_severity(&self) -> Option<Severity> {
        self.diagnostics.iter().map(|d| d.severity).max()
    }

    /// The codes of all diagnostics, in collection order.
    pub fn codes(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.code.as_str()).collect()
    }

    /// Consume self and return the underlying vector.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl IntoIterator for DiagnosticSet {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosticSet {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl FromIterator<Diagnostic> for DiagnosticSet {
    fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
        Self {
            diagnostics: iter.into_iter().collect(),
        }
    }
}
