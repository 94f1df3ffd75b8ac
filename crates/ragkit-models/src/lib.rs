//! Model registry for RAGKit
//!
//! Resolves caller-supplied aliases to backing models and caches the
//! expensive loaded instances for the process lifetime.

mod config;
mod hash_embedder;
mod http_generator;
mod loader;
mod registry;
mod resolve;

#[cfg(test)]
mod tests;

pub use config::InferenceConfig;
pub use hash_embedder::HashEmbedder;
pub use http_generator::HttpGenerator;
pub use loader::DefaultModelLoader;
pub use registry::ModelRegistry;
pub use resolve::{
    resolve_embedding, resolve_generation, ResolvedGeneration, BGE_BASE_EN_V15, DISTILGPT2,
    GPT_J_6B, LLAMA_2_7B_CHAT, MINILM_L6_V2, TINYLLAMA_1_1B_CHAT,
};

// Re-export core types for convenience
pub use ragkit_core::{EmbeddingModel, Error, GenerationModel, ModelLoader, Result, SamplingParams};
