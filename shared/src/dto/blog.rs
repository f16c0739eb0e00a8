use serde::{Deserialize, Serialize};

/// A blog/content post, optionally linked to a fish in the catalog.
///
/// Read-only; fetched as a list for the home feed or a single record for the
/// detail screen. `fish_id` lets the detail screen navigate to the referenced
/// koi.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub fish_id: Option<String>,
}
