//! Error adapter for converting SkeinError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. JSON
//! parse failures carry their document source, so they render with the
//! failure location labeled; every other error renders plainly.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use skein::SkeinError;
use skein_model::ModelError;

/// Adapter for a JSON parse failure with a known source location.
pub struct JsonDiagnosticAdapter<'a> {
    message: String,
    /// Document source for displaying snippets
    src: &'a str,
    span: SourceSpan,
}

impl<'a> JsonDiagnosticAdapter<'a> {
    /// Create an adapter pointing at the given 1-based line/column.
    fn new(message: String, src: &'a str, line: usize, column: usize) -> Self {
        let offset = offset_in(src, line, column);
        let length = if offset < src.len() { 1 } else { 0 };
        Self {
            message,
            src,
            span: SourceSpan::new(offset.into(), length),
        }
    }
}

impl fmt::Debug for JsonDiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonDiagnosticAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for JsonDiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for JsonDiagnosticAdapter<'_> {}

impl MietteDiagnostic for JsonDiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("skein::model::json"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "expected one of the recognized document shapes: \
             simple graph (branches/nodes/edges), catalog (objectTypes), \
             or assembly (assemblies)",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("parse failed here".to_string()), self.span),
        )))
    }
}

/// Adapter for [`SkeinError`] variants without source-location information.
pub struct ErrorAdapter<'a>(pub &'a SkeinError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SkeinError::Io(_) => "skein::io",
            SkeinError::Model(_) => "skein::model",
            SkeinError::Layout(_) => "skein::layout",
            SkeinError::Export(_) => "skein::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(JsonDiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Byte offset of a 1-based line/column pair in `src`, clamped to the
/// source length.
fn offset_in(src: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (index, text) in src.split('\n').enumerate() {
        if index + 1 == line {
            return (offset + column.saturating_sub(1)).min(src.len());
        }
        offset += text.len() + 1;
    }
    src.len()
}

/// Convert a [`SkeinError`] into a list of reportable errors.
///
/// JSON parse failures become one rich diagnostic against the retained
/// document source; every other variant becomes a single plain reportable.
pub fn to_reportables(err: &SkeinError) -> Vec<Reportable<'_>> {
    match err {
        SkeinError::Model(ModelError::Json { err: json_err, src }) => {
            vec![Reportable::Diagnostic(JsonDiagnosticAdapter::new(
                json_err.to_string(),
                src,
                json_err.line(),
                json_err.column(),
            ))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}
