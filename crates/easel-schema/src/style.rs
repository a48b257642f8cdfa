//! Named, reusable styles and the per-node style slot keys.

use serde::{Deserialize, Serialize};

/// The kind of a named style in the file-level style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleType {
    Fill,
    Text,
    Effect,
    Grid,
}

/// The key of an entry in a node's style map.
///
/// Unlike every other enumeration in the wire format these keys serialize
/// in lowercase (`"fill"`, `"strokes"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKey {
    Fill,
    Fills,
    Text,
    Grid,
    Effect,
    Stroke,
    Strokes,
}

/// A named, reusable appearance definition referenced by ID from nodes.
///
/// [Figma documentation](https://www.figma.com/developers/api#style-type)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub key: String,
    pub name: String,
    pub description: String,
    pub remote: bool,
    pub style_type: StyleType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_type_is_uppercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&StyleType::Effect).expect("serializable"),
            r#""EFFECT""#
        );
    }

    #[test]
    fn test_style_key_is_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&StyleKey::Fill).expect("serializable"),
            r#""fill""#
        );
        let parsed: StyleKey = serde_json::from_str(r#""strokes""#).expect("known key");
        assert_eq!(parsed, StyleKey::Strokes);
    }

    #[test]
    fn test_style_record_round_trip() {
        let json = r#"{"key":"a1b2","name":"Text/Primary","description":"","remote":false,"styleType":"TEXT"}"#;
        let style: Style = serde_json::from_str(json).expect("valid style JSON");
        assert_eq!(style.style_type, StyleType::Text);
        let value = serde_json::to_value(&style).expect("serializable");
        assert_eq!(value["styleType"], "TEXT");
    }
}
