//! In-memory fallback index
//!
//! A process-wide mapping from document id to document, ranked by
//! cosine similarity at query time. O(n * d) per query, which is fine:
//! this is the fallback/demo path, not the scaling path. Never
//! persisted; cleared only by process restart.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::RwLock;

use ragkit_core::{Document, Error, Result, ScoredDocument};

use crate::similarity::cosine_similarity;

pub struct MemoryIndex {
    documents: RwLock<HashMap<String, Document>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or overwrite a document (last-write-wins by id)
    pub fn put(&self, document: Document) -> Result<()> {
        let mut docs = self
            .documents
            .write()
            .map_err(|e| Error::VectorStore(format!("Lock error: {}", e)))?;
        docs.insert(document.id.clone(), document);
        Ok(())
    }

    /// Rank every stored document against the query vector and return
    /// the top `k` by descending cosine similarity. Ties keep map
    /// iteration order, which is not guaranteed stable.
    pub fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredDocument>> {
        let docs = self
            .documents
            .read()
            .map_err(|e| Error::VectorStore(format!("Lock error: {}", e)))?;

        let mut results: Vec<ScoredDocument> = docs
            .values()
            .map(|doc| ScoredDocument {
                id: doc.id.clone(),
                text: doc.text.clone(),
                score: cosine_similarity(&doc.vector, vector),
            })
            .collect();

        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        results.truncate(k);

        Ok(results)
    }

    pub fn len(&self) -> usize {
        self.documents.read().map(|docs| docs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, text: &str, vector: Vec<f32>) -> Document {
        Document {
            id: id.to_string(),
            text: text.to_string(),
            vector,
        }
    }

    #[test]
    fn test_put_overwrites_by_id() {
        let index = MemoryIndex::new();
        index.put(doc("x", "first", vec![1.0, 0.0])).unwrap();
        index.put(doc("x", "second", vec![0.0, 1.0])).unwrap();

        assert_eq!(index.len(), 1);
        let results = index.query(&[0.0, 1.0], 1).unwrap();
        assert_eq!(results[0].id, "x");
        assert_eq!(results[0].text, "second");
        assert!((results[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_query_ranks_by_cosine_similarity() {
        let index = MemoryIndex::new();
        index.put(doc("a", "doc a", vec![1.0, 0.0])).unwrap();
        index.put(doc("b", "doc b", vec![0.0, 1.0])).unwrap();

        let results = index.query(&[1.0, 0.0], 1).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "a");
        assert!((results[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_query_returns_at_most_k() {
        let index = MemoryIndex::new();
        for i in 0..5 {
            index
                .put(doc(&format!("d{}", i), "text", vec![1.0, i as f32]))
                .unwrap();
        }

        assert_eq!(index.query(&[1.0, 0.0], 3).unwrap().len(), 3);
        assert_eq!(index.query(&[1.0, 0.0], 10).unwrap().len(), 5);

        // Always sorted by descending score
        let results = index.query(&[1.0, 0.0], 5).unwrap();
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_zero_query_vector_scores_all_zero() {
        let index = MemoryIndex::new();
        index.put(doc("a", "doc a", vec![1.0, 0.0])).unwrap();
        index.put(doc("b", "doc b", vec![0.0, 1.0])).unwrap();

        let results = index.query(&[0.0, 0.0], 2).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_empty_index_returns_empty() {
        let index = MemoryIndex::new();
        assert!(index.query(&[1.0, 0.0], 3).unwrap().is_empty());
        assert!(index.is_empty());
    }
}
