// Scoring API client — thin reqwest wrapper over the remote analysis service.
//
// The API is a plain JSON-over-HTTP service; the only endpoint this tool
// needs is `GET /api/analyses/{id}`. Auth, retries, and rate limiting are
// the service's concern, not ours.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::RecordSource;
use crate::model::AdAnalysisRecord;

/// HTTP client for the ad scoring API.
pub struct ScoringApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScoringApiClient {
    /// Create a client pointing at the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("adlens/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a path relative to the base URL and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));

        debug!(url = %url, "scoring API GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Scoring API returned {status} for {url}: {body}");
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to deserialize response from {url}"))
    }
}

#[async_trait]
impl RecordSource for ScoringApiClient {
    async fn fetch_record(&self, id: &str) -> Result<AdAnalysisRecord> {
        self.get_json(&format!("api/analyses/{id}"))
            .await
            .with_context(|| format!("Failed to fetch analysis record {id}"))
    }
}
