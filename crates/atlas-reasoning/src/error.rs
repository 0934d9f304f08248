use std::path::PathBuf;

/// Failures of a single analysis run. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum ReasoningError {
    #[error("API token not set (export {0})")]
    MissingToken(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inference endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("inference endpoint returned no message content")]
    EmptyResponse,

    #[error("model output does not match the analysis schema: {0}")]
    Schema(String),

    #[error("failed to encode analysis: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
