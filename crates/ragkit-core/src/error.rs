//! Error types for the RAGKit pipeline

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the RAG pipeline
///
/// `UnsupportedModel` and `Generation` are fatal to a single request and
/// reported to the caller. `BackendUnavailable` is internal: the vector
/// store recovers from it by falling back to memory and never lets it
/// cross the service boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Timeout error: {0}")]
    Timeout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}
