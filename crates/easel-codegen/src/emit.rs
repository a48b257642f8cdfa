//! Shared helpers for TypeScript text emission.

use std::io::{self, Write};

use crate::error::CodegenError;

/// Writes two-space indentation at the given depth.
pub(crate) fn indent<W: Write>(out: &mut W, indentation: u16) -> io::Result<()> {
    for _ in 0..indentation {
        write!(out, "  ")?;
    }
    Ok(())
}

/// A name as a double-quoted TypeScript string literal.
pub(crate) fn json_quoted(raw: &str) -> Result<String, CodegenError> {
    Ok(serde_json::to_string(raw)?)
}
