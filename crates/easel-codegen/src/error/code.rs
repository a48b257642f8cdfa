//! Error codes for generator diagnostics.
//!
//! All current codes are `E1xx` - name collisions in generated output.

use std::fmt;

/// Error codes for categorizing generator diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Duplicate token path.
    ///
    /// Two nodes or styles resolve to the same token path. The first
    /// definition wins and later ones are dropped.
    E100,

    /// Duplicate component path.
    ///
    /// Two component sets occupy the same position in the document
    /// hierarchy, or a set is nested below another set's path.
    E101,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "duplicate token path",
            ErrorCode::E101 => "duplicate component path",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E101.as_str(), "E101");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E100.description(), "duplicate token path");
    }
}
