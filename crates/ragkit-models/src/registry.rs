//! Model registry with single-flight instance caching
//!
//! The cache is keyed by the resolved backing-model identifier, not the
//! caller-supplied alias: two aliases resolving to the same backing
//! model share one loaded instance. Instances live for the process
//! lifetime; there is no eviction.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;

use ragkit_core::{EmbeddingModel, Error, GenerationModel, ModelLoader, Result};

use crate::resolve::{resolve_embedding, resolve_generation};

type EmbedCell = Arc<OnceCell<Arc<dyn EmbeddingModel>>>;
type GenCell = Arc<OnceCell<Arc<dyn GenerationModel>>>;

pub struct ModelRegistry {
    loader: Arc<dyn ModelLoader>,
    accelerator: bool,
    embedders: Mutex<HashMap<&'static str, EmbedCell>>,
    generators: Mutex<HashMap<&'static str, GenCell>>,
}

impl ModelRegistry {
    pub fn new(loader: Arc<dyn ModelLoader>, accelerator: bool) -> Self {
        Self {
            loader,
            accelerator,
            embedders: Mutex::new(HashMap::new()),
            generators: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve an embedding alias and return its (cached) instance.
    ///
    /// Concurrent first-uses of the same backing model share one load:
    /// the per-key cell serializes instantiation while leaving loads of
    /// distinct backing models free to run in parallel.
    pub async fn embedding(&self, alias: &str) -> Result<Arc<dyn EmbeddingModel>> {
        let backing_id = resolve_embedding(alias)?;

        let cell = {
            let mut map = self
                .embedders
                .lock()
                .map_err(|e| Error::Other(format!("Registry lock poisoned: {}", e)))?;
            map.entry(backing_id)
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        let model = cell
            .get_or_try_init(|| async {
                log::info!("Loading embedding model: {}", backing_id);
                self.loader.load_embedding(backing_id).await
            })
            .await?;

        Ok(model.clone())
    }

    /// Resolve a generation alias and return its (cached) instance.
    ///
    /// Without an accelerator the alias is forced onto a small
    /// CPU-friendly model; the downgrade is surfaced as a warning.
    pub async fn generation(&self, alias: &str) -> Result<Arc<dyn GenerationModel>> {
        let resolved = resolve_generation(alias, self.accelerator);
        if resolved.downgraded {
            log::warn!(
                "No accelerator available, using lightweight model {} for alias '{}'",
                resolved.backing_id,
                alias
            );
        }
        let backing_id = resolved.backing_id;

        let cell = {
            let mut map = self
                .generators
                .lock()
                .map_err(|e| Error::Other(format!("Registry lock poisoned: {}", e)))?;
            map.entry(backing_id)
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        let model = cell
            .get_or_try_init(|| async {
                log::info!("Loading generation model: {}", backing_id);
                self.loader.load_generation(backing_id).await
            })
            .await?;

        Ok(model.clone())
    }

    /// Whether an accelerator was detected at construction
    pub fn accelerator(&self) -> bool {
        self.accelerator
    }
}
