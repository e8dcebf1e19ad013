//! Source-context rendering with ariadne.
//!
//! Given a diagnostic and the source text it refers to, this module produces
//! the visual snippet with the offending span highlighted. The plain one-line
//! form lives on `Diagnostic`'s `Display` impl; this is the rich form.

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::catalog::get_code_info;
use crate::{Diagnostic, Severity};

/// File name used in reports when the diagnostic's location has none.
const UNNAMED_SOURCE: &str = "<input>";

/// Render a diagnostic against its source text.
///
/// Produces the ariadne source snippet with the offending span underlined
/// and the diagnostic message attached as a label. The header line carries
/// the code and the catalog title, falling back to the message for codes
/// the catalog does not know.
///
/// Returns `None` if the report cannot be written (for example when the
/// span lies outside `source`).
pub fn render_report(diagnostic: &Diagnostic, source: &str) -> Option<String> {
    let file = diagnostic
        .location
        .file
        .clone()
        .unwrap_or_else(|| UNNAMED_SOURCE.to_string());

    let (report_kind, color) = match diagnostic.severity {
        Severity::Error => (ReportKind::Error, Color::Red),
        Severity::Warning => (ReportKind::Warning, Color::Yellow),
    };

    let title = match get_code_info(&diagnostic.code) {
        Some(info) => info.title.as_str(),
        None => diagnostic.message.as_str(),
    };

    let span = diagnostic.location.offset..diagnostic.location.end_offset();

    let report = Report::build(report_kind, file.clone(), diagnostic.location.offset)
        .with_message(format!("[{}] {}", diagnostic.code, title))
        .with_label(
            Label::new((file.clone(), span))
                .with_message(&diagnostic.message)
                .with_color(color),
        )
        .finish();

    let mut output = Vec::new();
    report.write((file, Source::from(source)), &mut output).ok()?;

    String::from_utf8(output).ok()
}

/// Render every diagnostic of a set against the same source text.
///
/// Diagnostics whose report cannot be written are skipped.
pub fn render_all(diagnostics: &crate::DiagnosticSet, source: &str) -> String {
    let mut result = String::new();
    for diagnostic in diagnostics {
        if let Some(rendered) = render_report(diagnostic, source) {
            result.push_str(&rendered);
        }
    }
    result
}
