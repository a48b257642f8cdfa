//! Diagnostics and error types for the code generators.
//!
//! Generators distinguish two failure classes. Content problems in the
//! input file (colliding names, entries that cannot become a token path)
//! are reported as [`Diagnostic`]s through a [`DiagnosticCollector`] and
//! never abort a run. Hard failures (a sink that stops accepting bytes, a
//! name with no usable identifier characters) surface as [`CodegenError`].

mod code;
mod collector;
mod diagnostic;

pub use code::ErrorCode;
pub use collector::DiagnosticCollector;
pub use diagnostic::{Diagnostic, Severity};

use std::io;

use thiserror::Error;

/// Hard failures that abort a generator.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("I/O error while writing generated output: {0}")]
    Write(#[from] io::Error),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// A name that must become a TypeScript identifier contains no
    /// alphabetic, `_`, or `$` characters at all.
    #[error("no usable identifier characters in {name:?}")]
    Identifier { name: String },
}
