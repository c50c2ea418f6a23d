//! Prompt-to-query rewriting through Together's chat-completions endpoint.

use leadscout_core::{QueryNormalizer, SearchQuery};
use reqwest::{Client, Url};

use crate::error::LlmError;
use crate::http::{build_client, endpoint_url, post_json};
use crate::types::{ChatMessage, ChatRequest, ChatResponse};

const MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.1";

/// Upper bound on the generated query length, in tokens.
const MAX_QUERY_TOKENS: u32 = 50;

/// System instruction sent ahead of every user prompt.
pub const QUERY_SYSTEM_PROMPT: &str = "You are an assistant that extracts clean Google Maps search strings from user input.\nRespond only with the query to search in Google Maps.";

/// Chat-completion client that rewrites free-form requests such as
/// "best dermatologists in Mumbai" into a maps search string.
pub struct TogetherClient {
    client: Client,
    api_key: String,
    endpoint: Url,
}

impl TogetherClient {
    /// Creates a client for the chat-completions API at `base_url`.
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
            endpoint: endpoint_url(base_url, "chat/completions")?,
        })
    }

    /// Sends one deterministic completion request and returns the trimmed
    /// text of the first choice.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Http`] on network failure or timeout.
    /// - [`LlmError::UnexpectedStatus`] on a non-2xx status.
    /// - [`LlmError::Deserialize`] if the body is not a chat completion.
    /// - [`LlmError::EmptyCompletion`] if there is no choice or its text is blank.
    pub async fn extract_search_query(&self, prompt: &str) -> Result<SearchQuery, LlmError> {
        let request = ChatRequest {
            model: MODEL,
            max_tokens: MAX_QUERY_TOKENS,
            temperature: 0.0,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: QUERY_SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response: ChatResponse =
            post_json(&self.client, &self.endpoint, &self.api_key, &request).await?;

        let query = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| LlmError::EmptyCompletion("chat completion".to_string()))?;

        tracing::debug!(prompt, query = %query, "normalized search query");
        Ok(SearchQuery::new(query))
    }
}

impl QueryNormalizer for TogetherClient {
    type Error = LlmError;

    async fn normalize(&self, prompt: &str) -> Result<SearchQuery, LlmError> {
        self.extract_search_query(prompt).await
    }
}
