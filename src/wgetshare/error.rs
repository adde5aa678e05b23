use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Please paste some code first")]
    Validation,

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Snippet not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid share ID: {0:?}")]
    InvalidIdentifier(String),

    #[error("Snippet already exists: {0}")]
    DuplicateId(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl ShareError {
    /// Collapses store-level failures into a `Persistence` error.
    ///
    /// The surfaces only distinguish "the store failed" from everything else,
    /// so IO and serialization errors raised by a backend are folded here.
    pub fn into_persistence(self) -> Self {
        match self {
            ShareError::Io(e) => ShareError::Persistence(e.to_string()),
            ShareError::Serialization(e) => ShareError::Persistence(e.to_string()),
            ShareError::DuplicateId(id) => {
                ShareError::Persistence(format!("duplicate id {}", id))
            }
            other => other,
        }
    }
}

impl From<confique::Error> for ShareError {
    fn from(e: confique::Error) -> Self {
        ShareError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShareError>;
