use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded inquiry against a photographer profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub photographer_id: u64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// ── DTOs ──

/// Body of `POST /api/photographers/{id}/inquiries`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiry {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    pub message: String,
}

impl CreateInquiry {
    /// Light sanity checks before recording; returns the first problem found.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty");
        }
        if !self.email.contains('@') {
            return Err("email must be a valid address");
        }
        if self.message.trim().is_empty() {
            return Err("message must not be empty");
        }
        Ok(())
    }
}
