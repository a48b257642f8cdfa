//! Opacity tokens: layer opacity of a reference frame.

use serde::Serialize;
use serde_json::json;

use easel_schema::node::Node;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OpacityToken<'a> {
    category: &'a str,
    export_key: &'a str,
    r#type: &'a str,
    value: f64,
}

pub(crate) fn as_opacity_token(node: &Node) -> Option<serde_json::Value> {
    Some(json!(OpacityToken {
        category: "opacity",
        export_key: "opacity",
        r#type: "number",
        value: node.opacity()
    }))
}
