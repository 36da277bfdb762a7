//! Record store client
//!
//! Reads the full artist list from the remote record store. The store
//! offers no pagination, filtering, or sorting contract; every call
//! fetches everything and all filtering happens locally.

use reqwest::Client;
use sm_common::model::ArtistRecord;
use sm_common::{Error, Result};
use std::time::Duration;
use tracing::debug;

/// Total request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Read-only client for the artist record store
pub struct StoreClient {
    http_client: Client,
    base_url: String,
}

impl StoreClient {
    /// Create a client against the given base URL
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be built (should not happen with
    /// valid defaults).
    pub fn new(base_url: impl Into<String>) -> Self {
        StoreClient {
            http_client: Client::builder()
                .timeout(DEFAULT_TIMEOUT)
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Fetch the full artist list
    ///
    /// # Errors
    /// Returns error if the request fails, the store responds with a
    /// non-success status, or the body does not parse as a record list.
    pub async fn list(&self) -> Result<Vec<ArtistRecord>> {
        let url = format!("{}/artists", self.base_url.trim_end_matches('/'));
        debug!(url = %url, "Fetching artist list from record store");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Record store request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http(format!(
                "Record store returned error {}: {}",
                status, body
            )));
        }

        let records: Vec<ArtistRecord> = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("Failed to parse record store response: {}", e)))?;

        debug!(count = records.len(), "Record store fetch complete");
        Ok(records)
    }
}
