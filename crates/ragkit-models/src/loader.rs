//! Default model loader

use async_trait::async_trait;
use std::sync::Arc;

use ragkit_core::{EmbeddingModel, Error, GenerationModel, ModelLoader, Result};

use crate::config::InferenceConfig;
use crate::hash_embedder::HashEmbedder;
use crate::http_generator::HttpGenerator;
use crate::resolve::{BGE_BASE_EN_V15, MINILM_L6_V2};

/// Loader wiring backing identifiers to concrete model instances:
/// hash-based embedders locally, generation over HTTP.
pub struct DefaultModelLoader {
    config: InferenceConfig,
}

impl DefaultModelLoader {
    pub fn new(config: InferenceConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ModelLoader for DefaultModelLoader {
    async fn load_embedding(&self, backing_id: &str) -> Result<Arc<dyn EmbeddingModel>> {
        let embedder = match backing_id {
            MINILM_L6_V2 => HashEmbedder::new(MINILM_L6_V2, 384),
            BGE_BASE_EN_V15 => HashEmbedder::new(BGE_BASE_EN_V15, 768),
            other => {
                return Err(Error::UnsupportedModel(format!(
                    "no loader for embedding backing model '{}'",
                    other
                )));
            }
        };

        Ok(Arc::new(embedder))
    }

    async fn load_generation(&self, backing_id: &str) -> Result<Arc<dyn GenerationModel>> {
        let generator = HttpGenerator::new(&self.config.inference_url, backing_id)?;
        Ok(Arc::new(generator))
    }
}
