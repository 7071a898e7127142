use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A photographer profile as served by the upstream collection.
///
/// Decoded straight from the upstream JSON (camelCase keys) and held
/// read-only for the lifetime of the process. Optional collections decode
/// defensively: a record missing `styles`, `tags`, `portfolio` or `reviews`
/// gets an empty list, never a decode fault.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographerRecord {
    /// Assigned by the upstream store; ids grow with recency.
    pub id: u64,
    pub name: String,
    pub location: String,
    /// Whole currency units per session.
    pub price: u32,
    /// Client rating in [0, 5].
    pub rating: f64,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub portfolio: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A client review shown on the profile page. Rendering-only — never matched
/// or filtered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub name: String,
    pub date: NaiveDate,
    pub rating: f64,
    pub comment: String,
}

// ── DTOs ──

/// Card-sized projection used by the listing endpoint (the grid never renders
/// the portfolio, bio or reviews).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographerSummary {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub price: u32,
    pub rating: f64,
    pub styles: Vec<String>,
    pub profile_pic: Option<String>,
}

impl From<&PhotographerRecord> for PhotographerSummary {
    fn from(record: &PhotographerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            location: record.location.clone(),
            price: record.price,
            rating: record.rating,
            styles: record.styles.clone(),
            profile_pic: record.profile_pic.clone(),
        }
    }
}

/// Response body for `GET /api/photographers`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    /// Size of the full filtered set, before windowing.
    pub total: usize,
    /// How many records are revealed in this response.
    pub visible: usize,
    /// Whether a "load more" would reveal anything further.
    pub has_more: bool,
    pub photographers: Vec<PhotographerSummary>,
}
