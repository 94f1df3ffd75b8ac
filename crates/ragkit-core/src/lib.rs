//! Core traits and types for RAGKit
//!
//! This crate defines the fundamental traits and types used across the
//! RAGKit pipeline: the error taxonomy, document and request/response
//! types, and capability-facing interfaces for embedding and generation
//! models, making the system test-friendly and extensible.

pub mod error;
pub mod model;
pub mod types;

pub use error::{Error, Result};
pub use model::{EmbeddingModel, GenerationModel, ModelLoader, SamplingParams};
pub use types::{
    BackendKind, ChatRequest, ChatResponse, Document, ScoredDocument, StoreResponse,
};
