//! Model capability traits and sampling parameters

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::Result;

/// Fixed sampling parameters for text generation.
///
/// These are deterministic policy parameters, not user-configurable:
/// the orchestrator always generates with the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    pub max_new_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            repetition_penalty: 1.05,
            max_new_tokens: 100,
        }
    }
}

/// Trait for embedding models
///
/// Turns text into a fixed-length vector. Every vector produced by one
/// model has the same dimensionality; mixing vectors from different
/// models in one index is a caller responsibility.
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    /// Embed a piece of text into a vector
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Dimensionality of vectors produced by this model
    fn dimension(&self) -> usize;

    /// The resolved backing-model identifier
    fn model_id(&self) -> &str;
}

/// Trait for generation models
#[async_trait]
pub trait GenerationModel: Send + Sync {
    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String>;

    /// The resolved backing-model identifier
    fn model_id(&self) -> &str;
}

/// Trait for instantiating backing models.
///
/// Instantiation is expensive (seconds); the registry guarantees it
/// happens at most once per backing-model identifier for the process
/// lifetime.
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Load the embedding model for a resolved backing identifier
    async fn load_embedding(&self, backing_id: &str) -> Result<Arc<dyn EmbeddingModel>>;

    /// Load the generation model for a resolved backing identifier
    async fn load_generation(&self, backing_id: &str) -> Result<Arc<dyn GenerationModel>>;
}
