//! Embedding capability
//!
//! [`Embedder`] is the seam to the external encoder: a batched,
//! order-preserving call that turns text inputs into fixed-length vectors.
//! [`HashEmbedder`] is the in-process default - a deterministic trigram and
//! word hashing embedder. It can be swapped for an ML encoder without
//! touching the ranker.

use ahash::RandomState;
use decora_core::{Result, Vector};

/// Default dimension for hash-based embeddings.
pub const DEFAULT_EMBEDDING_DIM: usize = 64;

/// Fixed seeds so embeddings are stable across processes and runs.
const HASH_SEEDS: (u64, u64, u64, u64) = (
    0x0bad_5eed_0000_0001,
    0x0bad_5eed_0000_0002,
    0x0bad_5eed_0000_0003,
    0x0bad_5eed_0000_0004,
);

/// An external embedding capability.
///
/// Implementations must return exactly one vector per input, in input order.
/// A failed call propagates to the ranker's caller; nothing retries here.
pub trait Embedder {
    fn embed(&self, inputs: &[String]) -> Result<Vec<Vector>>;
}

/// Deterministic hash-based text embedder.
///
/// Hashes character trigrams and whole words into a fixed-dimension vector
/// and normalizes it. Words contribute more than trigrams so exact token
/// overlap dominates fuzzy character overlap.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    /// Create an embedder with the given dimension.
    ///
    /// The dimension is clamped to at least 1, so embedding can never divide
    /// by a zero modulus.
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    fn embed_one(&self, text: &str) -> Vector {
        let state = RandomState::with_seeds(HASH_SEEDS.0, HASH_SEEDS.1, HASH_SEEDS.2, HASH_SEEDS.3);
        let mut components = vec![0.0f32; self.dim];
        let normalized = text.to_lowercase();

        for trigram in trigrams(&normalized) {
            let pos = (state.hash_one(trigram.as_str()) as usize) % self.dim;
            components[pos] += 1.0;
        }

        for word in normalized.split_whitespace() {
            let pos = (state.hash_one(word) as usize) % self.dim;
            components[pos] += 2.0;
        }

        let mut vector = Vector::new(components);
        vector.normalize();
        vector
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl Embedder for HashEmbedder {
    fn embed(&self, inputs: &[String]) -> Result<Vec<Vector>> {
        Ok(inputs.iter().map(|text| self.embed_one(text)).collect())
    }
}

/// Character trigrams of a padded string.
fn trigrams(s: &str) -> Vec<String> {
    let padded = format!("  {}  ", s);
    let chars: Vec<char> = padded.chars().collect();

    if chars.len() < 3 {
        return Vec::new();
    }

    chars
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_vector_per_input() {
        let embedder = HashEmbedder::default();
        let inputs = vec![
            "2 sofa, 1 table".to_string(),
            "Modern Minimalist".to_string(),
            "Coastal".to_string(),
        ];
        let vectors = embedder.embed(&inputs).unwrap();
        assert_eq!(vectors.len(), 3);
        for v in &vectors {
            assert_eq!(v.dim(), DEFAULT_EMBEDDING_DIM);
        }
    }

    #[test]
    fn test_deterministic() {
        let embedder = HashEmbedder::default();
        let input = vec!["1 bed, 1 lamp".to_string()];
        let a = embedder.embed(&input).unwrap();
        let b = embedder.embed(&input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_text_different_vector() {
        let embedder = HashEmbedder::default();
        let vectors = embedder
            .embed(&["leather industrial sofa".to_string(), "woven wicker chair".to_string()])
            .unwrap();
        assert_ne!(vectors[0], vectors[1]);
    }

    #[test]
    fn test_output_is_normalized() {
        let embedder = HashEmbedder::default();
        let vectors = embedder.embed(&["rustic wooden table".to_string()]).unwrap();
        let norm = vectors[0].norm();
        assert!((norm - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_empty_text_gives_zero_vector() {
        let embedder = HashEmbedder::default();
        let vectors = embedder.embed(&["".to_string()]).unwrap();
        // "  " padding yields whitespace-only trigrams that all hash to the
        // same few positions; after normalize the vector is still valid.
        assert_eq!(vectors[0].dim(), DEFAULT_EMBEDDING_DIM);
    }

    #[test]
    fn test_zero_dim_is_clamped() {
        let embedder = HashEmbedder::new(0);
        assert_eq!(embedder.dim(), 1);

        let vectors = embedder.embed(&["1 sofa".to_string()]).unwrap();
        assert_eq!(vectors[0].dim(), 1);
    }

    #[test]
    fn test_similar_text_scores_higher() {
        let embedder = HashEmbedder::default();
        let vectors = embedder
            .embed(&[
                "2 sofa, 1 table".to_string(),
                "1 sofa, 1 table".to_string(),
                "marble bathtub".to_string(),
            ])
            .unwrap();
        let close = vectors[0].cosine_similarity(&vectors[1]);
        let far = vectors[0].cosine_similarity(&vectors[2]);
        assert!(close > far, "close={} far={}", close, far);
    }
}
