//! Hash-based embedding model
//!
//! A deterministic, CPU-friendly embedder: words and bigrams are hashed
//! into a fixed number of dimensions and the result is L2-normalized.
//! Not a semantic model, but it preserves the contract that matters
//! here: one model, one dimensionality, stable vectors for stable text.

use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use ragkit_core::{EmbeddingModel, Result};

pub struct HashEmbedder {
    model_id: &'static str,
    dimension: usize,
}

impl HashEmbedder {
    pub fn new(model_id: &'static str, dimension: usize) -> Self {
        Self {
            model_id,
            dimension,
        }
    }

    fn encode(&self, text: &str) -> Vec<f32> {
        let normalized_text = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect::<String>();

        let words: Vec<&str> = normalized_text.split_whitespace().collect();
        let mut embedding = vec![0.0f32; self.dimension];

        for (i, word) in words.iter().enumerate() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            let hash = hasher.finish();

            let base_idx = (hash as usize) % self.dimension;

            // Position-based weighting
            let weight = 1.0 / (1.0 + i as f32 * 0.1);
            embedding[base_idx] += weight;

            if word.len() > 3 {
                let secondary_idx = ((hash >> 16) as usize) % self.dimension;
                embedding[secondary_idx] += weight * 0.5;
            }
        }

        // Bigram features for a little context sensitivity
        for window in words.windows(2) {
            let bigram = format!("{} {}", window[0], window[1]);
            let mut hasher = DefaultHasher::new();
            bigram.hash(&mut hasher);
            let hash = hasher.finish();

            let idx = (hash as usize) % self.dimension;
            embedding[idx] += 0.3;
        }

        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for val in &mut embedding {
                *val /= magnitude;
            }
        }

        embedding
    }
}

#[async_trait]
impl EmbeddingModel for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.encode(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_id(&self) -> &str {
        self.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::MINILM_L6_V2;

    #[tokio::test]
    async fn test_embedding_is_deterministic() {
        let embedder = HashEmbedder::new(MINILM_L6_V2, 384);
        let a = embedder.embed("ibm cloud cli commands").await.unwrap();
        let b = embedder.embed("ibm cloud cli commands").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 384);
    }

    #[tokio::test]
    async fn test_embedding_is_normalized() {
        let embedder = HashEmbedder::new(MINILM_L6_V2, 384);
        let v = embedder.embed("some text to embed").await.unwrap();
        let magnitude: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((magnitude - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_empty_text_gives_zero_vector() {
        let embedder = HashEmbedder::new(MINILM_L6_V2, 384);
        let v = embedder.embed("").await.unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }
}
