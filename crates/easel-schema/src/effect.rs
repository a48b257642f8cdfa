//! Shadow and blur effects.

use serde::{Deserialize, Serialize};

use crate::{color::Color, geometry::Vector};

/// The kind of a visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    InnerShadow,
    DropShadow,
    LayerBlur,
    BackgroundBlur,
}

/// A visual effect such as a shadow or blur.
///
/// Shadow effects carry a color and offset; blur effects omit both, which is
/// why those fields are optional.
///
/// [Figma documentation](https://www.figma.com/developers/api#effect-type)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    /// Type of effect
    pub r#type: EffectType,
    /// Is the effect active?
    pub visible: bool,
    /// The color of the shadow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// How far the shadow is projected in the x and y directions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vector>,
    /// How far the shadow spreads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
}

impl Effect {
    /// The shadow spread distance, defaulting to zero.
    pub fn spread(&self) -> f64 {
        self.spread.unwrap_or(0.0)
    }
}
