use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Store error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("Store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
