//! Error types for Easel operations.
//!
//! This module provides the main error type [`EaselError`] which wraps
//! various error conditions that can occur while decoding a file and
//! generating artifacts.

use std::io;

use thiserror::Error;

use easel_codegen::error::CodegenError;

/// The main error type for Easel operations.
///
/// # Diagnostic Variants
///
/// The `Decode` variant keeps the JSON source alongside the underlying
/// error so callers can point at the offending location when reporting.
#[derive(Debug, Error)]
pub enum EaselError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Decode { err: serde_json::Error, src: String },

    #[error("Codegen error: {0}")]
    Codegen(#[from] CodegenError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EaselError {
    /// Create a new `Decode` error with the associated JSON source.
    pub fn new_decode_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Decode {
            err,
            src: src.into(),
        }
    }
}
