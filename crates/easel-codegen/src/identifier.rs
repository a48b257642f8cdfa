//! TypeScript identifier derivation from node and file names.

use crate::error::CodegenError;

/// Converts a free-form name into a TypeScript identifier.
///
/// Valid identifier characters (alphanumerics, `_`, `$`) are kept; runs of
/// anything else become word gaps that capitalize the following character.
/// Leading digits are skipped so the result starts with a letter. The first
/// kept character is upper- or lowercased according to `capitalize`,
/// producing PascalCase or camelCase.
///
/// # Errors
///
/// Returns [`CodegenError::Identifier`] when the name contains no usable
/// starting character at all.
pub fn to_identifier(raw: &str, capitalize: bool) -> Result<String, CodegenError> {
    fn valid_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_' || c == '$'
    }

    let mut output = String::new();
    let mut chars = raw.chars();
    let first = chars
        .by_ref()
        .find(|c| valid_char(*c) && !c.is_numeric())
        .ok_or_else(|| CodegenError::Identifier {
            name: raw.to_string(),
        })?;
    if capitalize {
        output.extend(first.to_uppercase());
    } else {
        output.extend(first.to_lowercase());
    }
    let mut word_gap = false;
    for c in chars {
        if valid_char(c) {
            if word_gap {
                output.extend(c.to_uppercase());
            } else {
                output.push(c);
            }
            word_gap = false;
        } else {
            word_gap = true;
        }
    }
    Ok(output)
}
