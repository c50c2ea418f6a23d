use thiserror::Error;

/// Errors returned by the language-model clients.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {endpoint}: {message}")]
    UnexpectedStatus {
        status: u16,
        endpoint: String,
        message: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The model replied without any usable text.
    #[error("{0} returned no usable text")]
    EmptyCompletion(String),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
