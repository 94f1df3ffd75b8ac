//! Remote indexed backend (Qdrant)
//!
//! Each call is a fresh connect/use/drop cycle with no persistent
//! connection pool. That trades latency for operational simplicity;
//! pooling would be an optimization, not a behavior change.

use qdrant_client::qdrant::{
    value::Kind, CreateCollectionBuilder, Distance, PointStruct, SearchPointsBuilder,
    UpsertPointsBuilder, Value, VectorParamsBuilder,
};
use qdrant_client::{Payload, Qdrant};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

use ragkit_core::{Document, Error, Result, ScoredDocument};

/// Configuration for the remote vector index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub qdrant_url: String,
    pub collection_name: String,
}

impl StoreConfig {
    /// Create configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let qdrant_url = env::var("RAGKIT_QDRANT_URL")
            .unwrap_or_else(|_| "http://localhost:6334".to_string());

        let collection_name =
            env::var("RAGKIT_COLLECTION").unwrap_or_else(|_| "documents".to_string());

        Self {
            qdrant_url,
            collection_name,
        }
    }

    /// Create configuration with explicit values
    pub fn new(qdrant_url: impl Into<String>, collection_name: impl Into<String>) -> Self {
        Self {
            qdrant_url: qdrant_url.into(),
            collection_name: collection_name.into(),
        }
    }
}

pub struct RemoteIndex {
    config: StoreConfig,
}

impl RemoteIndex {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    async fn connect(&self) -> Result<Qdrant> {
        Qdrant::from_url(&self.config.qdrant_url)
            .build()
            .map_err(|e| Error::BackendUnavailable(e.to_string()))
    }

    /// Idempotent create-if-absent for the document collection
    async fn ensure_collection(&self, client: &Qdrant, dimension: u64) -> Result<()> {
        let exists = client
            .collection_exists(self.config.collection_name.as_str())
            .await
            .map_err(|e| Error::BackendUnavailable(e.to_string()))?;

        if !exists {
            client
                .create_collection(
                    CreateCollectionBuilder::new(self.config.collection_name.as_str())
                        .vectors_config(VectorParamsBuilder::new(dimension, Distance::Cosine)),
                )
                .await
                .map_err(|e| Error::BackendUnavailable(e.to_string()))?;
            log::info!("Created collection: {}", self.config.collection_name);
        }

        Ok(())
    }

    /// Insert a document with its vector, overwriting any point with
    /// the same id.
    pub async fn put(&self, document: &Document) -> Result<()> {
        let client = self.connect().await?;
        self.ensure_collection(&client, document.vector.len() as u64)
            .await?;

        let mut payload = Payload::new();
        payload.insert("doc_id", document.id.clone());
        payload.insert("text", document.text.clone());
        payload.insert("indexed_at", chrono::Utc::now().to_rfc3339());

        let point = PointStruct::new(
            point_id_for(&document.id),
            document.vector.clone(),
            payload,
        );

        client
            .upsert_points(
                UpsertPointsBuilder::new(self.config.collection_name.as_str(), vec![point])
                    .wait(true),
            )
            .await
            .map_err(|e| Error::BackendUnavailable(e.to_string()))?;

        Ok(())
    }

    /// Nearest-neighbor search. Scores are whatever the backend
    /// reports, on a different scale from the fallback's cosine.
    pub async fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredDocument>> {
        let client = self.connect().await?;
        self.ensure_collection(&client, vector.len() as u64).await?;

        let response = client
            .search_points(
                SearchPointsBuilder::new(
                    self.config.collection_name.as_str(),
                    vector.to_vec(),
                    k as u64,
                )
                .with_payload(true),
            )
            .await
            .map_err(|e| Error::BackendUnavailable(e.to_string()))?;

        let docs = response
            .result
            .into_iter()
            .map(|point| ScoredDocument {
                id: value_as_str(point.payload.get("doc_id"))
                    .unwrap_or("N/A")
                    .to_string(),
                text: value_as_str(point.payload.get("text"))
                    .unwrap_or("")
                    .to_string(),
                score: point.score,
            })
            .collect();

        Ok(docs)
    }
}

/// Stable point id derived from the document id, so a later put with
/// the same id overwrites in place.
fn point_id_for(doc_id: &str) -> String {
    let digest = md5::compute(doc_id.as_bytes());
    Uuid::from_bytes(digest.0).to_string()
}

fn value_as_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value {
            kind: Some(Kind::StringValue(s)),
        }) => Some(s.as_str()),
        _ => None,
    }
}
