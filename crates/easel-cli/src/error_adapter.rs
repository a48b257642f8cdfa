//! Error adapter for converting EaselError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI.
//!
//! # Decode Errors
//!
//! [`EaselError::Decode`] carries the JSON source alongside the
//! underlying serde error, so the adapter can point a labeled span at the
//! offending line and column of the input.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use easel::EaselError;

/// Adapter for a decode failure with source location information.
pub struct DecodeAdapter<'a> {
    /// The underlying JSON error
    err: &'a serde_json::Error,
    /// Source text for displaying snippets
    src: &'a str,
}

impl<'a> DecodeAdapter<'a> {
    /// Create a new decode adapter.
    pub fn new(err: &'a serde_json::Error, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for DecodeAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DecodeAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for DecodeAdapter<'_> {}

impl MietteDiagnostic for DecodeAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("easel::decode"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "the input must be a captured Figma file API response",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let offset = position_to_offset(self.src, self.err.line(), self.err.column())?;
        let length = if offset < self.src.len() { 1 } else { 0 };
        let message = match self.err.classify() {
            serde_json::error::Category::Syntax => "invalid JSON syntax here",
            serde_json::error::Category::Data => "value does not match the file schema",
            serde_json::error::Category::Eof => "input ends here",
            serde_json::error::Category::Io => return None,
        };
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(
                Some(message.to_string()),
                SourceSpan::new(offset.into(), length),
            ),
        )))
    }
}

/// Byte offset of a 1-indexed line and column in `src`.
fn position_to_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (index, text) in src.split('\n').enumerate() {
        if index + 1 == line {
            return Some(offset + column.saturating_sub(1).min(text.len()));
        }
        offset += text.len() + 1;
    }
    None
}

/// Adapter for [`EaselError`] variants without source location.
pub struct ErrorAdapter<'a>(pub &'a EaselError);

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
            EaselError::Io(_) => "easel::io",
            EaselError::Decode { .. } => return None,
            EaselError::Codegen(_) => "easel::codegen",
            EaselError::Config(_) => "easel::config",
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
///
/// This enum wraps either a decode failure with source spans or a plain
/// error, providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A decode failure with source location information.
    Decode(DecodeAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Decode(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Decode(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Decode(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Decode(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Decode(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Decode(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert an [`EaselError`] into a list of reportable errors.
///
/// [`EaselError::Decode`] becomes a [`Reportable::Decode`] with a labeled
/// span into the JSON source; every other variant becomes a single
/// [`Reportable::Error`].
pub fn to_reportables(err: &EaselError) -> Vec<Reportable<'_>> {
    match err {
        EaselError::Decode { err: json_err, src } => {
            vec![Reportable::Decode(DecodeAdapter::new(json_err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error(src: &str) -> EaselError {
        let err = serde_json::from_str::<easel::file::File>(src)
            .expect_err("source should not decode");
        EaselError::new_decode_error(err, src)
    }

    #[test]
    fn test_decode_error_has_labeled_span() {
        let src = "{\n  \"name\": 12\n}";
        let err = decode_error(src);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Decode(adapter) => {
                let labels: Vec<_> = adapter.labels().expect("has a label").collect();
                assert_eq!(labels.len(), 1);
                assert!(labels[0].primary());
                // The span lands inside the source text.
                assert!(labels[0].offset() <= src.len());
            }
            Reportable::Error(_) => panic!("Expected Decode"),
        }
    }

    #[test]
    fn test_non_decode_error_is_plain() {
        let err = EaselError::Config("bad marker".to_string());

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(adapter) => {
                assert_eq!(adapter.to_string(), "Configuration error: bad marker");
                assert!(adapter.labels().is_none());
            }
            Reportable::Decode(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_offset_of_line_and_column() {
        let src = "ab\ncdef\ng";
        assert_eq!(position_to_offset(src, 1, 1), Some(0));
        assert_eq!(position_to_offset(src, 2, 3), Some(5));
        assert_eq!(position_to_offset(src, 3, 1), Some(8));
        assert_eq!(position_to_offset(src, 0, 1), None);
        // Columns past the end of the line clamp to the line end.
        assert_eq!(position_to_offset(src, 1, 99), Some(2));
    }
}
