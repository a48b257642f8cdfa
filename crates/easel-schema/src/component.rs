//! Component metadata records.

use serde::{Deserialize, Serialize};

/// Metadata for a published component, looked up from the file-level
/// component table by node ID.
///
/// [Figma documentation](https://www.figma.com/developers/api#component-type)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Component {
    pub key: String,
    pub name: String,
    pub description: String,
}
