use std::path::PathBuf;

/// Errors raised while loading datasets or reading event documents.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid dataset {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },

    #[error("event not found: {0}")]
    NotFound(String),
}

impl DataError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
