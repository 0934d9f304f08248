use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use atlas_data::DataError;

/// Failures a handler turns into a plain-text HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("event not found: {0}")]
    EventNotFound(String),

    #[error("event data is malformed: {0}")]
    EventMalformed(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DataError> for WebError {
    fn from(e: DataError) -> Self {
        match e {
            DataError::NotFound(id) => Self::EventNotFound(id),
            DataError::Parse { .. } | DataError::Invalid { .. } => {
                Self::EventMalformed(e.to_string())
            }
            DataError::Io { .. } => Self::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            Self::EventNotFound(id) => {
                tracing::debug!(event_id = %id, "event not found");
                (StatusCode::NOT_FOUND, "Event not found").into_response()
            }
            Self::EventMalformed(reason) => {
                tracing::error!(error = %reason, "failed to parse event document");
                (StatusCode::INTERNAL_SERVER_ERROR, "Event data is malformed").into_response()
            }
            Self::Internal(reason) => {
                tracing::error!(error = %reason, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
