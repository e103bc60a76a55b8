mod expectation;

use serde::{Deserialize, Serialize};

/// Icon shown next to every result unless configured otherwise.
pub const DEFAULT_ICON: &str = "icon/expect.png";

/// A single result row handed back to the launcher.
/// Field names follow the launcher's JSON-RPC result schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Text displayed as the row title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Path of the icon, relative to the plugin directory.
    #[serde(rename = "IcoPath")]
    pub ico_path: String,
}

impl ResultItem {
    /// Create a result item with the given title and icon.
    pub fn new(title: impl Into<String>, ico_path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ico_path: ico_path.into(),
        }
    }
}
