//! Border tokens: stroke styling of a reference frame.

use serde::Serialize;
use serde_json::json;

use easel_schema::node::{Node, StrokeAlign};

#[derive(Debug, Serialize)]
struct StringValue<'a> {
    value: &'a str,
    r#type: &'a str,
}

#[derive(Debug, Serialize)]
struct MiterLimit<'a> {
    value: u8,
    r#type: &'a str,
    unit: &'a str,
}

#[derive(Debug, Serialize)]
struct Weight<'a> {
    value: f64,
    r#type: &'a str,
    unit: &'a str,
}

#[derive(Debug, Serialize)]
struct Stroke<'a> {
    value: String,
    r#type: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BorderToken<'a> {
    category: &'a str,
    export_key: &'a str,
    stroke_align: StringValue<'a>,
    stroke_cap: StringValue<'a>,
    stroke_join: StringValue<'a>,
    stroke_miter_limit: MiterLimit<'a>,
    stroke_weight: Weight<'a>,
    stroke: Stroke<'a>,
}

pub(crate) fn as_border_token(node: &Node) -> Option<serde_json::Value> {
    let stroke = node.strokes().first()?;
    let stroke_align = node.stroke_align()?;
    let stroke_weight = node.stroke_weight()?;

    Some(json!(BorderToken {
        category: "border",
        export_key: "border",
        stroke_align: StringValue {
            value: match stroke_align {
                StrokeAlign::Inside => "inside",
                StrokeAlign::Outside => "outside",
                StrokeAlign::Center => "center",
            },
            r#type: "string"
        },
        // The API does not expose cap, join, or miter limit, so these
        // carry the tool defaults.
        stroke_cap: StringValue {
            value: "none",
            r#type: "string"
        },
        stroke_join: StringValue {
            value: "miter",
            r#type: "string"
        },
        stroke_miter_limit: MiterLimit {
            value: 4,
            r#type: "number",
            unit: "degree"
        },
        stroke_weight: Weight {
            value: stroke_weight,
            r#type: "number",
            unit: "pixel"
        },
        stroke: Stroke {
            value: stroke.color()?.to_rgb_string(),
            r#type: "color"
        }
    }))
}
