use serde::{Deserialize, Serialize};

/// A koi variety (e.g. Kohaku, Showa) with its breeding origin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KoiType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub origin: String,
}

/// Minimal reference to the user who authored a comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A customer review attached to exactly one koi.
///
/// Immutable once created; the client offers no edit or delete path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub content: String,
    #[serde(default)]
    pub author: UserRef,
    #[serde(default)]
    pub created_at: String,
}

/// Request body for posting a new comment on a koi.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCommentRequest {
    pub rating: u8,
    pub content: String,
}

/// An individual fish in the catalog.
///
/// Read-only from the client's perspective; fetched as a list or a single
/// record. Prices are integral VND.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Koi {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub gender: String,
    /// Body length in centimeters.
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub koi_type: KoiType,
    /// Daily feeding amount in grams.
    #[serde(default)]
    pub feeding_amount: f64,
    /// Screening (selection) rate as a percentage.
    #[serde(default)]
    pub screening_rate: f64,
    #[serde(default)]
    pub category: String,
    pub price: u64,
    #[serde(default)]
    pub sold: bool,
    #[serde(default)]
    pub certificates: Vec<String>,
    #[serde(default)]
    pub year_of_birth: i32,
    #[serde(default)]
    pub consignment_status: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}
