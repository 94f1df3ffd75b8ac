//! Dual-backend vector store facade
//!
//! Graceful-degradation contract: `put` never raises to the caller and
//! `query` never propagates backend errors. When the remote index is
//! selected but unreachable, both operations fall back to the in-memory
//! index and report the degradation through an explicit flag plus a
//! warning log, never through an error.

use serde::Serialize;

use ragkit_core::{BackendKind, Document, ScoredDocument};

use crate::memory::MemoryIndex;
use crate::remote::{RemoteIndex, StoreConfig};

/// Outcome of a put. `stored` is false only if even the in-memory
/// write could not be recorded, which does not happen by construction.
#[derive(Debug, Clone, Serialize)]
pub struct PutOutcome {
    pub stored: bool,
    pub degraded: bool,
}

/// Outcome of a query, with the degraded-mode flag alongside the docs
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    pub docs: Vec<ScoredDocument>,
    pub degraded: bool,
}

pub struct VectorStore {
    remote: RemoteIndex,
    memory: MemoryIndex,
}

impl VectorStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            remote: RemoteIndex::new(config),
            memory: MemoryIndex::new(),
        }
    }

    /// Store a document in the selected backend, falling back to
    /// memory on any remote failure.
    pub async fn put(&self, document: Document, backend: BackendKind) -> PutOutcome {
        let mut degraded = false;

        if backend == BackendKind::RemoteIndexed {
            match self.remote.put(&document).await {
                Ok(()) => {
                    log::debug!("Stored in remote index: {}", document.id);
                    return PutOutcome {
                        stored: true,
                        degraded: false,
                    };
                }
                Err(e) => {
                    log::warn!(
                        "Remote index unavailable, storing '{}' in memory: {}",
                        document.id,
                        e
                    );
                    degraded = true;
                }
            }
        }

        match self.memory.put(document) {
            Ok(()) => PutOutcome {
                stored: true,
                degraded,
            },
            Err(e) => {
                log::error!("In-memory write failed: {}", e);
                PutOutcome {
                    stored: false,
                    degraded,
                }
            }
        }
    }

    /// Retrieve the top `k` documents from the selected backend,
    /// falling back to memory on any remote failure. Returns empty
    /// only if even the fallback fails.
    pub async fn query(&self, vector: &[f32], backend: BackendKind, k: usize) -> QueryOutcome {
        let mut degraded = false;

        if backend == BackendKind::RemoteIndexed {
            match self.remote.query(vector, k).await {
                Ok(docs) => {
                    log::debug!("Retrieved {} docs from remote index", docs.len());
                    return QueryOutcome {
                        docs,
                        degraded: false,
                    };
                }
                Err(e) => {
                    log::warn!("Remote index unavailable, querying memory: {}", e);
                    degraded = true;
                }
            }
        }

        match self.memory.query(vector, k) {
            Ok(docs) => QueryOutcome { docs, degraded },
            Err(e) => {
                log::error!("In-memory query failed: {}", e);
                QueryOutcome {
                    docs: Vec::new(),
                    degraded,
                }
            }
        }
    }

    /// Number of documents held by the in-memory fallback
    pub fn memory_len(&self) -> usize {
        self.memory.len()
    }
}
