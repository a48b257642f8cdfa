//! Breakpoint tokens: the width of viewport reference frames.

use serde::Serialize;
use serde_json::json;

use easel_schema::node::Node;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BreakpointToken<'a> {
    category: &'a str,
    export_key: &'a str,
    value: f64,
    r#type: &'a str,
    unit: &'a str,
}

pub(crate) fn as_breakpoint_token(node: &Node) -> Option<serde_json::Value> {
    let width = node.absolute_bounding_box()?.width?;

    Some(json!(BreakpointToken {
        category: "breakpoint",
        export_key: "breakpoint",
        value: width,
        r#type: "number",
        unit: "pixel"
    }))
}
