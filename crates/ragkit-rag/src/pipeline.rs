//! RAG orchestration pipeline

use std::sync::Arc;

use ragkit_core::{
    BackendKind, ChatRequest, ChatResponse, Document, Result, SamplingParams,
};
use ragkit_models::ModelRegistry;
use ragkit_store::{PutOutcome, VectorStore};

use crate::answer::clean_answer;
use crate::prompt::{build_context, build_prompt};

/// Composes embedding, retrieval, prompt construction, generation, and
/// answer post-processing into one request/response cycle.
///
/// Stateless apart from the two shared caches (the registry's model
/// instances and the store's in-memory fallback), so calls are freely
/// request-parallel.
pub struct RagPipeline {
    registry: Arc<ModelRegistry>,
    store: Arc<VectorStore>,
}

impl RagPipeline {
    pub fn new(registry: Arc<ModelRegistry>, store: Arc<VectorStore>) -> Self {
        Self { registry, store }
    }

    /// Embed a document and store it in the selected backend.
    ///
    /// Embedding failures abort the request; backend failures do not
    /// (the store degrades to memory and reports it in the outcome).
    pub async fn store_document(
        &self,
        document_id: &str,
        text: &str,
        embedding_alias: &str,
        backend: BackendKind,
    ) -> Result<PutOutcome> {
        let embedder = self.registry.embedding(embedding_alias).await?;
        let vector = embedder.embed(text).await?;

        let document = Document {
            id: document_id.to_string(),
            text: text.to_string(),
            vector,
        };

        Ok(self.store.put(document, backend).await)
    }

    /// Answer a query grounded in retrieved documents.
    ///
    /// Model-resolution and generation failures fail the request;
    /// retrieval never does. All four response fields are always
    /// present, never partial.
    pub async fn answer(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let embedder = self.registry.embedding(&request.embedding).await?;
        let query_vector = embedder.embed(&request.query).await?;

        let backend = BackendKind::parse(&request.backend);
        let retrieval = self
            .store
            .query(&query_vector, backend, request.top_k)
            .await;
        if retrieval.degraded {
            log::debug!("Serving retrieval from in-memory fallback");
        }

        let context = build_context(&retrieval.docs);
        let prompt = build_prompt(&context, &request.query);

        let generator = self.registry.generation(&request.llm).await?;
        let raw = generator
            .generate(&prompt, &SamplingParams::default())
            .await?;

        let response = clean_answer(&raw, &prompt);

        Ok(ChatResponse {
            query: request.query.clone(),
            context,
            response,
            retrieved_docs: retrieval.docs,
        })
    }
}
