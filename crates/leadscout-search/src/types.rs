//! SearchAPI response types for the `google_maps` engine.
//!
//! ## Observed shape
//!
//! ### `local_results`
//! Array of places for the requested `start` offset, at most 20 per page.
//! Omitted entirely (not an empty array) when the offset is past the last
//! result, so it is modelled with `#[serde(default)]`.
//!
//! ### `rating` / `reviews`
//! Usually numbers (`4.7`, `312`), but some places report them as strings
//! (`"4.7"`, `"1,204"`) and unrated places omit both. Both accept either form.
//!
//! ### `email`
//! Rarely present. When it is, it is taken as-is and the website is not probed.
//!
//! ### `error`
//! Invalid keys and exhausted quotas come back as `{"error": "..."}`, sometimes
//! with a 200 status.

use serde::Deserialize;

/// Top-level response from `GET /api/v1/search?engine=google_maps`.
#[derive(Debug, Deserialize)]
pub struct SearchApiResponse {
    #[serde(default)]
    pub local_results: Vec<SearchApiLocalResult>,

    #[serde(default)]
    pub error: Option<String>,
}

/// A single place from `local_results`.
#[derive(Debug, Deserialize)]
pub struct SearchApiLocalResult {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub rating: Option<RawNumber>,

    #[serde(default)]
    pub reviews: Option<RawNumber>,
}

/// A numeric field that may arrive as a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

impl RawNumber {
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => n.as_f64(),
            RawNumber::Text(s) => s.trim().replace(',', "").parse::<f64>().ok(),
        }
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            RawNumber::Number(n) => n.as_u64(),
            RawNumber::Text(s) => s.trim().replace(',', "").parse::<u64>().ok(),
        }
    }
}
