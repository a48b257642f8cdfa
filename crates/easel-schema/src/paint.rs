//! Fill and stroke paints.

use serde::{Deserialize, Serialize};

use crate::{color::Color, geometry::Vector};

/// The kind of a paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
}

/// How a layer blends with the layers below it.
///
/// [Figma documentation](https://www.figma.com/developers/api#blendmode-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlendMode {
    PassThrough,
    Normal,
    Darken,
    Multiply,
    LinearBurn,
    ColorBurn,
    Lighten,
    Screen,
    LinearDodge,
    ColorDodge,
    Overlay,
    SoftLight,
    HardLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

/// A solid color, gradient, or image texture applied as a fill or stroke.
///
/// [Figma documentation](https://www.figma.com/developers/api#paint-type)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    pub r#type: PaintType,
    /// Is the paint enabled?
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Overall opacity of the paint. Colors within the paint can also carry
    /// their own alpha, which blends with this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Solid color of the paint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// How this paint blends with what is behind it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    /// Start, end, and width handle positions of a gradient in normalized
    /// object space.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_handle_positions: Option<[Vector; 3]>,
}

impl Paint {
    /// Whether the paint is enabled. Defaults to `true` when the API omits
    /// the field.
    pub fn visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// The overall paint opacity, defaulting to fully opaque.
    pub fn opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    /// The solid color of the paint, if any.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_type_wire_tags() {
        assert_eq!(
            serde_json::to_string(&PaintType::GradientLinear).expect("serializable"),
            r#""GRADIENT_LINEAR""#
        );
        assert_eq!(
            serde_json::to_string(&BlendMode::PassThrough).expect("serializable"),
            r#""PASS_THROUGH""#
        );
    }

    #[test]
    fn test_minimal_solid_paint() {
        let paint: Paint = serde_json::from_str(
            r#"{"type":"SOLID","color":{"r":0.0,"g":0.0,"b":0.0,"a":1.0}}"#,
        )
        .expect("valid paint JSON");
        assert!(paint.visible());
        assert_eq!(paint.opacity(), 1.0);
        assert!(paint.color().is_some());
    }

    #[test]
    fn test_disabled_paint() {
        let paint: Paint =
            serde_json::from_str(r#"{"type":"IMAGE","visible":false,"opacity":0.5}"#)
                .expect("valid paint JSON");
        assert!(!paint.visible());
        assert_eq!(paint.opacity(), 0.5);
        assert!(paint.color().is_none());
    }

    #[test]
    fn test_absent_fields_are_skipped_on_output() {
        let paint: Paint = serde_json::from_str(r#"{"type":"SOLID"}"#).expect("valid paint JSON");
        let json = serde_json::to_value(&paint).expect("serializable");
        let object = json.as_object().expect("paint serializes to an object");
        assert_eq!(object.len(), 1);
        assert_eq!(object["type"], "SOLID");
    }
}
