use thiserror::Error;

/// Errors surfaced by the library. Empty queries and empty filter
/// results are normal values, never errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The host page has no element with the requested id.
    #[error("element with id \"{id}\" not found in page")]
    ElementNotFound { id: String },

    /// The search index violated an invariant at load time.
    #[error("invalid index entry: {detail}")]
    InvalidIndexEntry { detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_entry(detail: impl Into<String>) -> Self {
        Error::InvalidIndexEntry {
            detail: detail.into(),
        }
    }
}
