//! The top-level file container.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{component::Component, node::Node, style::Style};

/// A complete file as returned by the `GET /v1/files/:key` endpoint.
///
/// The component and style tables are keyed by node ID and style ID
/// respectively; nodes reference into them rather than embedding the
/// records. Insertion order of the tables is preserved so re-serialized
/// output matches the captured response.
///
/// [Figma documentation](https://www.figma.com/developers/api#get-files-endpoint)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// The root node of the document tree.
    pub document: Node,
    /// Published components, keyed by node ID.
    pub components: IndexMap<String, Component>,
    /// Named styles, keyed by style ID.
    pub styles: IndexMap<String, Style>,
    /// The file name as shown in the tool.
    pub name: String,
    /// Version of the file schema.
    pub schema_version: u8,
    /// Opaque version identifier of the file contents.
    pub version: String,
}
