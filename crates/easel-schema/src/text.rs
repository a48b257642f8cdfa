//! Character-level text formatting.

use serde::{Deserialize, Serialize};

/// Text casing applied to a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextCase {
    Upper,
    Lower,
    Title,
    SmallCaps,
    SmallCapsForced,
}

/// Text decoration applied to a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    Strikethrough,
    Underline,
}

/// Dimensions along which a text box resizes to fit its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAutoResize {
    Height,
    WidthAndHeight,
    /// Text is shortened and trailing characters replaced with an ellipsis
    /// when the content exceeds the bounds
    Truncate,
}

/// Metadata for character formatting.
///
/// [Figma documentation](https://www.figma.com/developers/api#typestyle-type)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    /// Font family of text (standard name)
    pub font_family: String,
    /// Whether or not text is italicized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    /// Numeric font weight
    pub font_weight: f64,
    /// Font size in px
    pub font_size: f64,
    /// Text casing applied to the node, default is the original casing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_case: Option<TextCase>,
    /// Text decoration applied to the node, default is none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<TextDecoration>,
    /// Dimensions along which text will auto resize, default is that the
    /// text does not auto-resize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_auto_resize: Option<TextAutoResize>,
    /// Line height in px
    pub line_height_px: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_style_round_trip() {
        let json = r#"{"fontFamily":"GDS Transport","fontWeight":700.0,"fontSize":19.0,"textCase":"UPPER","lineHeightPx":25.0}"#;
        let style: TypeStyle = serde_json::from_str(json).expect("valid type style JSON");
        assert_eq!(style.font_family, "GDS Transport");
        assert_eq!(style.text_case, Some(TextCase::Upper));
        assert_eq!(style.italic, None);

        let value = serde_json::to_value(&style).expect("serializable");
        assert_eq!(value["fontWeight"], 700.0);
        assert!(value.get("italic").is_none());
        assert!(value.get("textDecoration").is_none());
    }

    #[test]
    fn test_text_auto_resize_tags() {
        assert_eq!(
            serde_json::to_string(&TextAutoResize::WidthAndHeight).expect("serializable"),
            r#""WIDTH_AND_HEIGHT""#
        );
    }
}
