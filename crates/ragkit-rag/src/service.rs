//! Service facade for the front door
//!
//! Both operations are synchronous request/response contracts. All
//! errors are captured into a structured `{error}` payload rather than
//! propagated, so the front door only ever forwards an already-safe
//! result.

use serde::Serialize;
use std::sync::Arc;

use ragkit_core::{ChatRequest, ChatResponse, Error, StoreResponse};
use ragkit_models::ModelRegistry;
use ragkit_store::VectorStore;

use crate::pipeline::RagPipeline;

/// A successful payload or a structured error, serialized flat:
/// either the payload's own fields or `{"error": "..."}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Ok(T),
    Err { error: String },
}

impl<T> From<Result<T, Error>> for ApiResponse<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => ApiResponse::Ok(value),
            Err(e) => ApiResponse::Err {
                error: e.to_string(),
            },
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn is_err(&self) -> bool {
        matches!(self, ApiResponse::Err { .. })
    }
}

pub struct RagService {
    pipeline: RagPipeline,
}

impl RagService {
    pub fn new(registry: Arc<ModelRegistry>, store: Arc<VectorStore>) -> Self {
        Self {
            pipeline: RagPipeline::new(registry, store),
        }
    }

    /// Embed and store a document under the caller-supplied id, using
    /// the default embedding model and the remote backend (degrading to
    /// memory when it is unreachable).
    pub async fn store(&self, document_id: &str, text: &str) -> ApiResponse<StoreResponse> {
        let result = self
            .pipeline
            .store_document(
                document_id,
                text,
                "all-MiniLM-L6-v2",
                ragkit_core::BackendKind::RemoteIndexed,
            )
            .await
            .map(|outcome| StoreResponse {
                stored_id: document_id.to_string(),
                status: if outcome.stored {
                    "success".to_string()
                } else {
                    "failed".to_string()
                },
            });

        result.into()
    }

    /// Answer a chat query, returning the query, assembled context,
    /// cleaned answer, and retrieved documents together.
    pub async fn chat(&self, request: &ChatRequest) -> ApiResponse<ChatResponse> {
        self.pipeline.answer(request).await.into()
    }
}
