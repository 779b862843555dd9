//! Embedding Service collaborator.
//!
//! The pipeline only needs `embed(text) -> fixed-length vector`; the shipped
//! provider is a deterministic token-hash embedder whose dimensionality
//! matches the index schema. A remote API provider can slot in behind the
//! same `Embedder` trait later.

use anyhow::Result;
use std::hash::{Hash, Hasher};
use twox_hash::XxHash64;

pub use brdsearch_core::traits::Embedder;

/// Default dimensionality, matching the vector index schema.
pub const DEFAULT_DIM: usize = 3072;

/// Deterministic hashing embedder: every whitespace token bumps one
/// hash-selected component, and the result is L2-normalized. Identical
/// input always yields the identical vector.
pub struct HashingEmbedder {
    dim: usize,
}

impl HashingEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0f32; self.dim];
        for (i, token) in text.split_whitespace().enumerate() {
            let mut hasher = XxHash64::with_seed(0);
            token.hash(&mut hasher);
            let h = hasher.finish();
            let idx = (h as usize) % self.dim;
            let val = (((h >> 32) as u32) as f32) / (u32::MAX as f32);
            v[idx] += val + (i as f32 % 3.0) * 0.01;
        }
        let norm = (v.iter().map(|x| x * x).sum::<f32>()).sqrt().max(1e-6);
        for x in &mut v {
            *x /= norm;
        }
        v
    }
}

impl Embedder for HashingEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_text(t)).collect())
    }
}

/// Provider used by the ingestion driver. `APP_EMBEDDING_DIM` overrides the
/// dimensionality for tests against narrower index schemas.
pub fn get_default_embedder() -> Result<Box<dyn Embedder>> {
    let dim = std::env::var("APP_EMBEDDING_DIM")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DIM);
    Ok(Box::new(HashingEmbedder::new(dim)))
}
