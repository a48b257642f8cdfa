//! RGBA color values as returned by the Figma API.

use serde::{Deserialize, Serialize};

/// An RGBA color with channels in the 0.0 to 1.0 range.
///
/// [Figma documentation](https://www.figma.com/developers/api#color-type)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Color {
    /// Red channel value.
    #[serde(rename = "r")]
    pub red: f64,
    /// Green channel value.
    #[serde(rename = "g")]
    pub green: f64,
    /// Blue channel value.
    #[serde(rename = "b")]
    pub blue: f64,
    /// Alpha channel value.
    #[serde(rename = "a")]
    pub alpha: f64,
}

impl Color {
    /// Formats the color as a CSS `rgb(...)` string with 8-bit channels and
    /// the raw alpha value.
    ///
    /// # Examples
    ///
    /// ```
    /// use easel_schema::color::Color;
    ///
    /// let white = Color { red: 1.0, green: 1.0, blue: 1.0, alpha: 1.0 };
    /// assert_eq!(white.to_rgb_string(), "rgb(255, 255, 255, 1)");
    /// ```
    pub fn to_rgb_string(&self) -> String {
        format!(
            "rgb({}, {}, {}, {})",
            (self.red * 255.0).floor(),
            (self.green * 255.0).floor(),
            (self.blue * 255.0).floor(),
            self.alpha
        )
    }

    /// Formats the color as a CSS `rgb(...)` string, or `None` when the
    /// color is fully transparent.
    pub fn to_option_rgb_string(&self) -> Option<String> {
        if self.alpha == 0.0 {
            None
        } else {
            Some(self.to_rgb_string())
        }
    }
}
