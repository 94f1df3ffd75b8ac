//! RAG orchestration for RAGKit
//!
//! Composes the model registry and the vector store into the full
//! request/response cycle, and exposes the front-door service facade.

mod answer;
mod pipeline;
mod prompt;
mod service;


pub use answer::{clean_answer, MAX_ANSWER_CHARS};
pub use pipeline::RagPipeline;
pub use prompt::{build_context, build_prompt, NO_CONTEXT};
pub use service::{ApiResponse, RagService};

// Re-export core types for convenience
pub use ragkit_core::{
    BackendKind, ChatRequest, ChatResponse, Document, Error, Result, ScoredDocument,
    StoreResponse,
};
