use thiserror::Error;

/// Failures that end a run before any result is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("prompt is empty")]
    EmptyInput,

    #[error("query normalization failed: {0}")]
    Normalization(#[source] Box<dyn std::error::Error + Send + Sync>),
}
