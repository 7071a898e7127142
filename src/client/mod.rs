use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

use crate::models::photographers::PhotographerRecord;

/// Per-request timeout when `UPSTREAM_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors surfaced by the upstream photographer collection.
///
/// Transport failures and non-2xx statuses stay distinguishable from a
/// genuine not-found, so callers can tell "zero results" from "fetch failed".
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    Status(StatusCode),
    #[error("photographer {0} not found")]
    NotFound(u64),
}

impl SourceError {
    /// True for the errors that mean "the upstream could not answer", as
    /// opposed to a well-formed not-found answer.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, SourceError::Transport(_) | SourceError::Status(_))
    }
}

/// Thin client over the two upstream endpoints
/// (`GET {base}/photographers`, `GET {base}/photographers/:id`).
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/photographers` — the whole collection.
    pub async fn fetch_all(&self) -> Result<Vec<PhotographerRecord>, SourceError> {
        let url = format!("{}/photographers", self.base_url);
        let response = self.client.get(&url).timeout(self.timeout).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }
        Ok(response.json().await?)
    }

    /// `GET {base}/photographers/{id}` — a single record, or `NotFound`.
    pub async fn fetch_one(&self, id: u64) -> Result<PhotographerRecord, SourceError> {
        let url = format!("{}/photographers/{id}", self.base_url);
        let response = self.client.get(&url).timeout(self.timeout).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(id));
        }
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }
        Ok(response.json().await?)
    }
}
