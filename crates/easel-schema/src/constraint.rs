//! Layout constraints relative to the containing frame.

use serde::{Deserialize, Serialize};

/// Vertical constraint of a node relative to its containing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutConstraintVertical {
    /// Node is laid out relative to top of the containing frame
    Top,
    /// Node is laid out relative to bottom of the containing frame
    Bottom,
    /// Node is vertically centered relative to containing frame
    Center,
    /// Both top and bottom of node are constrained relative to containing
    /// frame (node stretches with frame)
    TopBottom,
    /// Node scales vertically with containing frame
    Scale,
}

/// Horizontal constraint of a node relative to its containing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutConstraintHorizontal {
    /// Node is laid out relative to left of the containing frame
    Left,
    /// Node is laid out relative to right of the containing frame
    Right,
    /// Node is horizontally centered relative to containing frame
    Center,
    /// Both left and right of node are constrained relative to containing
    /// frame (node stretches with frame)
    LeftRight,
    /// Node scales horizontally with containing frame
    Scale,
}

/// Layout constraint relative to the containing frame.
///
/// [Figma documentation](https://www.figma.com/developers/api#layoutconstraint-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayoutConstraint {
    pub vertical: LayoutConstraintVertical,
    pub horizontal: LayoutConstraintHorizontal,
}
