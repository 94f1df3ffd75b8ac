//! Shared document and request/response types

use serde::{Deserialize, Serialize};

/// A document stored in the vector store.
///
/// Immutable once stored; a later `put` with the same id overwrites in
/// place (last-write-wins, no versioning).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
    pub vector: Vec<f32>,
}

/// An ephemeral projection produced by query results.
///
/// `score` semantics differ by backend: cosine similarity from the
/// in-memory index, the backend-reported score from the remote index.
/// Scores are not comparable across backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: String,
    pub text: String,
    pub score: f32,
}

/// Which vector index a request targets.
///
/// Anything that is not a recognized remote backend name routes to the
/// in-memory fallback, so callers can operate with zero external
/// services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    RemoteIndexed,
    InMemory,
}

impl BackendKind {
    /// Parse a caller-supplied backend name (case-insensitive).
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "qdrant" | "remote" => BackendKind::RemoteIndexed,
            _ => BackendKind::InMemory,
        }
    }
}

/// A chat request as received from the front door
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub llm: String,
    pub embedding: String,
    pub backend: String,
    pub top_k: usize,
}

impl Default for ChatRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            llm: "gpt-j".to_string(),
            embedding: "minilm".to_string(),
            backend: "qdrant".to_string(),
            top_k: 3,
        }
    }
}

/// Response from a chat request. All four fields are always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub query: String,
    pub context: String,
    pub response: String,
    pub retrieved_docs: Vec<ScoredDocument>,
}

/// Response from a store request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreResponse {
    pub stored_id: String,
    pub status: String,
}
