//! HTTP client for SearchAPI's `google_maps` engine.

mod fetch_all;

use std::time::Duration;

use leadscout_core::Listing;
use reqwest::{Client, Url};

use crate::error::SearchError;
use crate::normalize::normalize_listing;
use crate::types::SearchApiResponse;

/// Number of places SearchAPI returns for a full `google_maps` page. The
/// `start` offset advances by this much per page.
pub const PAGE_SIZE: usize = 20;

/// Client for SearchAPI's local-business search.
///
/// Every page request carries the `engine`, `q`, `hl`, `start` and `api_key`
/// parameters. Non-2xx responses, API-level `error` payloads and undecodable
/// bodies are typed errors; the multi-page loop in [`Self::fetch_all_listings`]
/// turns them into an early stop instead.
pub struct SearchApiClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl SearchApiClient {
    /// Creates a client for the SearchAPI host at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SearchError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("leadscout/0.1 (lead-discovery)")
            .build()?;

        let endpoint = format!("{}/api/v1/search", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint).map_err(|e| SearchError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
        })
    }

    /// Fetches one page of listings starting at `offset`.
    ///
    /// A page past the end of the results comes back empty rather than as an
    /// error.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Http`] on network failure or timeout.
    /// - [`SearchError::UnexpectedStatus`] on any non-2xx status.
    /// - [`SearchError::Api`] if the payload carries an `error` message.
    /// - [`SearchError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_page(
        &self,
        query: &str,
        offset: usize,
    ) -> Result<Vec<Listing>, SearchError> {
        let url = self.search_url(query, offset);
        let context = format!("google_maps page at offset {offset}");

        tracing::debug!(query, offset, "requesting search page");

        // The URL carries the API key, so it is stripped from transport errors.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;

        let parsed = serde_json::from_str::<SearchApiResponse>(&body);

        if !status.is_success() {
            if let Ok(SearchApiResponse {
                error: Some(message),
                ..
            }) = parsed
            {
                return Err(SearchError::Api(message));
            }
            return Err(SearchError::UnexpectedStatus {
                status: status.as_u16(),
                context,
            });
        }

        let parsed = parsed.map_err(|e| SearchError::Deserialize { context, source: e })?;
        if let Some(message) = parsed.error {
            return Err(SearchError::Api(message));
        }

        Ok(parsed
            .local_results
            .into_iter()
            .map(normalize_listing)
            .collect())
    }

    /// Builds the page URL with percent-encoded query parameters.
    fn search_url(&self, query: &str, offset: usize) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("engine", "google_maps");
            pairs.append_pair("q", query);
            pairs.append_pair("hl", "en");
            pairs.append_pair("start", &offset.to_string());
            pairs.append_pair("api_key", &self.api_key);
        }
        url
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
