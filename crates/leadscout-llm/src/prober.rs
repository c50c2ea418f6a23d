//! Email discovery on a single page through OpenAI's responses endpoint with
//! the `web_search_preview` tool enabled.

use leadscout_core::{PageProber, ProbeOutcome};
use reqwest::{Client, Url};

use crate::error::LlmError;
use crate::http::{build_client, endpoint_url, post_json};
use crate::types::{ResponsesRequest, ResponsesResponse, ResponsesTool};

const MODEL: &str = "gpt-4.1";

/// Instruction asking the model for the first uncensored email on `url`, or
/// the `nothing here` marker.
#[must_use]
pub fn probe_instruction(url: &str) -> String {
    format!(
        "get the first email from this website without censoring it:{url} and nothing else. \
         if no email id is found then return 'nothing here'"
    )
}

/// Page reader backed by a web-search-capable model.
pub struct OpenAiProber {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl OpenAiProber {
    /// Creates a prober for the responses API at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`LlmError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            api_key: api_key.to_owned(),
            endpoint: endpoint_url(base_url, "responses")?,
        })
    }

    /// Returns the model's raw, trimmed reply for `url`.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Http`] on network failure or timeout.
    /// - [`LlmError::UnexpectedStatus`] on a non-2xx status.
    /// - [`LlmError::Deserialize`] if the body is not a responses payload.
    pub async fn find_email_on_page(&self, url: &str) -> Result<String, LlmError> {
        let request = ResponsesRequest {
            model: MODEL,
            temperature: 0.0,
            tools: vec![ResponsesTool {
                kind: "web_search_preview",
            }],
            input: probe_instruction(url),
        };

        let response: ResponsesResponse =
            post_json(&self.client, &self.endpoint, &self.api_key, &request).await?;

        Ok(response.text().trim().to_string())
    }
}

impl PageProber for OpenAiProber {
    async fn probe_page(&self, url: &str) -> ProbeOutcome {
        match self.find_email_on_page(url).await {
            Ok(reply) => {
                let outcome = ProbeOutcome::from_reply(&reply);
                tracing::debug!(url, ?outcome, "page probed");
                outcome
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "email probe failed");
                ProbeOutcome::Failed(e.to_string())
            }
        }
    }
}
