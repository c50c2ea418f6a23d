//! Language-model collaborators for leadscout.
//!
//! [`TogetherClient`] turns a free-form prompt into a maps search string via a
//! chat-completion model; [`OpenAiProber`] asks a web-search-enabled model for
//! the first email address on a page.

pub mod error;
pub mod normalizer;
pub mod prober;
pub mod types;

mod http;

pub use error::LlmError;
pub use normalizer::{TogetherClient, QUERY_SYSTEM_PROMPT};
pub use prober::{probe_instruction, OpenAiProber};
