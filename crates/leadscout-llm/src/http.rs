//! Shared request plumbing for the model endpoints.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::LlmError;

pub(crate) fn build_client(timeout_secs: u64) -> Result<Client, LlmError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent("leadscout/0.1 (lead-discovery)")
        .build()?)
}

/// Joins `base_url` and an endpoint path, tolerating a trailing slash on the base.
pub(crate) fn endpoint_url(base_url: &str, endpoint: &str) -> Result<Url, LlmError> {
    let raw = format!("{}/{endpoint}", base_url.trim_end_matches('/'));
    Url::parse(&raw).map_err(|e| LlmError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// POSTs `body` as JSON with a bearer credential and decodes the reply.
///
/// Non-2xx responses become [`LlmError::UnexpectedStatus`] carrying the API's
/// `error.message` when the body has one.
pub(crate) async fn post_json<B, R>(
    client: &Client,
    url: &Url,
    api_key: &str,
    body: &B,
) -> Result<R, LlmError>
where
    B: Serialize + Sync,
    R: DeserializeOwned,
{
    let response = client
        .post(url.clone())
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await?;
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(LlmError::UnexpectedStatus {
            status: status.as_u16(),
            endpoint: url.path().to_owned(),
            message: error_message(&text),
        });
    }

    serde_json::from_str(&text).map_err(|e| LlmError::Deserialize {
        context: url.path().to_owned(),
        source: e,
    })
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message").or(Some(e)))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "no error message".to_string())
}
