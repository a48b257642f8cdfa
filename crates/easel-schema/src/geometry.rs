//! Basic geometric types used throughout the document model.

use serde::{Deserialize, Serialize};

/// A 2D point or offset.
///
/// [Figma documentation](https://www.figma.com/developers/api#vector-type)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned bounding box in absolute coordinates.
///
/// The API omits individual fields for nodes with indeterminate bounds
/// (for example, empty frames), so every field is optional.
///
/// [Figma documentation](https://www.figma.com/developers/api#rectangle-type)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Rectangle {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}
