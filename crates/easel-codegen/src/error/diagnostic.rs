//! The Diagnostic type carrying a single generator finding.

use std::fmt;

use crate::error::ErrorCode;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The generator continued; output may be missing an entry.
    Warning,
    /// The generator could not process the entry at all.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single finding produced while generating output.
///
/// Diagnostics are built fluently:
///
/// ```
/// use easel_codegen::error::{Diagnostic, ErrorCode};
///
/// let diag = Diagnostic::warning("duplicate token path \"size/small\"")
///     .with_code(ErrorCode::E100)
///     .with_path(["Foundations", "_tokens/foundations", "size/small"])
///     .with_help("the first definition wins");
/// assert_eq!(diag.to_string(), "warning: duplicate token path \"size/small\"");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    code: Option<ErrorCode>,
    /// Node-name path from the document root to the offending entry.
    path: Vec<String>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            code: None,
            path: Vec::new(),
            help: None,
        }
    }

    /// Attach an error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach the document path of the offending entry.
    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    /// Attach help text suggesting how to resolve the finding.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// The diagnostic severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error code, if one was attached.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// The document path of the offending entry. Empty when the finding is
    /// not tied to a node.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}
