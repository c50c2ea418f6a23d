//! Wire types for the chat-completions and responses endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /chat/completions` (OpenAI-compatible, as served by Together).
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of `POST /responses`.
#[derive(Debug, Serialize)]
pub struct ResponsesRequest<'a> {
    pub model: &'a str,
    pub temperature: f32,
    pub tools: Vec<ResponsesTool<'a>>,
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ResponsesTool<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
}

/// Response of `POST /responses`.
///
/// The raw API nests text under `output[].content[]`; some gateways also
/// flatten it into a top-level `output_text`, which wins when present.
#[derive(Debug, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub output_text: Option<String>,

    #[serde(default)]
    pub output: Vec<ResponseOutputItem>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseOutputItem {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub content: Vec<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub text: Option<String>,
}

impl ResponsesResponse {
    /// Text of the reply: `output_text` if present, otherwise every
    /// `output_text` content part joined in order.
    #[must_use]
    pub fn text(&self) -> String {
        if let Some(text) = &self.output_text {
            return text.clone();
        }
        self.output
            .iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("")
    }
}
