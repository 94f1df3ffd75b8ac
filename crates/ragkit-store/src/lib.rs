//! Vector storage and retrieval for RAGKit
//!
//! Two backends behind one facade: a remote Qdrant index and an
//! in-memory cosine-ranked fallback. Backend unavailability is handled
//! transparently so callers can operate with zero external services.

mod memory;
mod remote;
mod similarity;
mod store;

pub use memory::MemoryIndex;
pub use remote::{RemoteIndex, StoreConfig};
pub use similarity::cosine_similarity;
pub use store::{PutOutcome, QueryOutcome, VectorStore};

// Re-export core types for convenience
pub use ragkit_core::{BackendKind, Document, Error, Result, ScoredDocument};
