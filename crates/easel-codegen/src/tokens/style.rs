//! Export entries for named styles from the file-level style table.

use serde::Serialize;
use serde_json::json;

use easel_schema::style::Style;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportToken<'a> {
    category: &'a str,
    export_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

pub(crate) fn as_style_token(category: &str, style: &Style) -> serde_json::Value {
    json!(ExportToken {
        category,
        export_key: category,
        comment: if style.description.is_empty() {
            None
        } else {
            Some(&style.description)
        },
    })
}
