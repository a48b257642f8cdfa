//! Prototyping transition easing curves.

use serde::{Deserialize, Serialize};

/// Animation easing curves for prototyping transitions.
///
/// [Figma documentation](https://www.figma.com/developers/api#easingtype-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EasingType {
    /// No easing, similar to CSS linear
    Linear,
    /// Ease in with an animation curve similar to CSS ease-in
    EaseIn,
    /// Ease out with an animation curve similar to CSS ease-out
    EaseOut,
    /// Ease in and then out with an animation curve similar to CSS ease-in-out
    EaseInAndOut,
    EaseInBack,
    EaseOutBack,
    EaseInAndOutBack,
    CustomBezier,
    Gentle,
    Quick,
    Bouncy,
    Slow,
    CustomSpring,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_wire_tags() {
        assert_eq!(
            serde_json::to_string(&EasingType::EaseInAndOut).expect("serializable"),
            r#""EASE_IN_AND_OUT""#
        );
        let parsed: EasingType =
            serde_json::from_str(r#""CUSTOM_BEZIER""#).expect("known tag");
        assert_eq!(parsed, EasingType::CustomBezier);
    }

    #[test]
    fn test_unknown_easing_tag_is_an_error() {
        assert!(serde_json::from_str::<EasingType>(r#""EASE_SIDEWAYS""#).is_err());
    }
}
