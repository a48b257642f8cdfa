//! Motion tokens: prototyping transition timing and easing.

use serde_json::json;

use easel_schema::{easing::EasingType, node::Node};

pub(crate) fn as_motion_token(node: &Node) -> Option<serde_json::Value> {
    let duration = node.transition_duration()?;
    let easing = node.transition_easing()?;
    Some(json!({
        "category": "motion",
        "exportKey": "motion",
        "type": {
            "value": "scroll_animate",
            "type": "string"
        },
        "duration": {
            "value": duration / 1000.0,
            "type": "number",
            "unit": "s"
        },
        "easing": {
            "value": match easing {
                EasingType::Linear => "linear",
                EasingType::EaseIn => "ease-in",
                EasingType::EaseOut => "ease-out",
                EasingType::EaseInAndOut => "ease-in-out",
                EasingType::EaseInBack => "ease-in-back",
                EasingType::EaseOutBack => "ease-out-back",
                EasingType::EaseInAndOutBack => "ease-in-out-back",
                EasingType::CustomBezier => "custom-cubic-bezier",
                EasingType::Gentle => "gentle",
                EasingType::Quick => "quick",
                EasingType::Bouncy => "bouncy",
                EasingType::Slow => "slow",
                EasingType::CustomSpring => "custom-spring",
            },
            "type": "string"
        },
        "easingFunction": easing_function(easing)
    }))
}

/// Cubic-bezier control points or spring parameters for each easing curve.
fn easing_function(easing: &EasingType) -> serde_json::Value {
    match easing {
        EasingType::Linear => json!({
            "x1": { "value": 0.0, "type": "number" },
            "x2": { "value": 1.0, "type": "number" },
            "y1": { "value": 0.0, "type": "number" },
            "y2": { "value": 1.0, "type": "number" }
        }),
        EasingType::EaseIn => json!({
            "x1": { "value": 0.42, "type": "number" },
            "x2": { "value": 1.0, "type": "number" },
            "y1": { "value": 0.0, "type": "number" },
            "y2": { "value": 1.0, "type": "number" }
        }),
        EasingType::EaseOut => json!({
            "x1": { "value": 0.0, "type": "number" },
            "x2": { "value": 0.58, "type": "number" },
            "y1": { "value": 0.0, "type": "number" },
            "y2": { "value": 1.0, "type": "number" }
        }),
        EasingType::EaseInAndOut => json!({
            "x1": { "value": 0.42, "type": "number" },
            "x2": { "value": 0.58, "type": "number" },
            "y1": { "value": 0.0, "type": "number" },
            "y2": { "value": 1.0, "type": "number" }
        }),
        EasingType::EaseInBack => json!({
            "x1": { "value": 0.3, "type": "number" },
            "x2": { "value": 0.7, "type": "number" },
            "y1": { "value": -0.05, "type": "number" },
            "y2": { "value": -0.5, "type": "number" }
        }),
        EasingType::EaseOutBack => json!({
            "x1": { "value": 0.45, "type": "number" },
            "x2": { "value": 0.8, "type": "number" },
            "y1": { "value": 1.45, "type": "number" },
            "y2": { "value": 1.0, "type": "number" }
        }),
        EasingType::EaseInAndOutBack => json!({
            "x1": { "value": 0.7, "type": "number" },
            "x2": { "value": 0.4, "type": "number" },
            "y1": { "value": -0.4, "type": "number" },
            "y2": { "value": 1.4, "type": "number" }
        }),
        // The API does not expose custom bezier parameters; fall back to
        // the ease-in-out curve.
        EasingType::CustomBezier => json!({
            "x1": { "value": 0.42, "type": "number" },
            "x2": { "value": 0.58, "type": "number" },
            "y1": { "value": 0.0, "type": "number" },
            "y2": { "value": 1.0, "type": "number" }
        }),
        EasingType::Gentle => json!({
            "mass": { "value": 1, "type": "number" },
            "stiffness": { "value": 100, "type": "number" },
            "damping": { "value": 15, "type": "number" }
        }),
        EasingType::Quick => json!({
            "mass": { "value": 1, "type": "number" },
            "stiffness": { "value": 300, "type": "number" },
            "damping": { "value": 20, "type": "number" }
        }),
        EasingType::Bouncy => json!({
            "mass": { "value": 1, "type": "number" },
            "stiffness": { "value": 600, "type": "number" },
            "damping": { "value": 15, "type": "number" }
        }),
        EasingType::Slow => json!({
            "mass": { "value": 1, "type": "number" },
            "stiffness": { "value": 80, "type": "number" },
            "damping": { "value": 20, "type": "number" }
        }),
        // The API does not expose custom spring parameters; fall back to
        // the gentle spring.
        EasingType::CustomSpring => json!({
            "mass": { "value": 1, "type": "number" },
            "stiffness": { "value": 100, "type": "number" },
            "damping": { "value": 15, "type": "number" }
        }),
    }
}
