//! Style ranking
//!
//! Ranks candidate style labels against a textual object description by
//! cosine similarity of their embeddings. One batched embed call covers the
//! description and every candidate; results keep their association to the
//! originating label, so parallel embedding hosts only need to preserve the
//! batch order of the reply.

use crate::embed::Embedder;
use decora_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A candidate style with its similarity score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedStyle {
    pub name: String,
    pub score: f32,
}

/// Top-k style ranker over an embedding capability.
#[derive(Debug, Clone)]
pub struct StyleRanker<E> {
    embedder: E,
}

impl<E: Embedder> StyleRanker<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Rank `candidates` by similarity to `description`, best first.
    ///
    /// Returns at most `top_k` results; fewer when there are fewer
    /// candidates. Ties keep candidate order (stable sort). Empty candidates
    /// produce an empty ranking, not an error. Embedder failures propagate.
    pub fn rank(
        &self,
        description: &str,
        candidates: &[String],
        top_k: usize,
    ) -> Result<Vec<RankedStyle>> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        // One batched call: description first, then every candidate label.
        let mut inputs = Vec::with_capacity(candidates.len() + 1);
        inputs.push(description.to_string());
        inputs.extend(candidates.iter().cloned());

        let vectors = self.embedder.embed(&inputs)?;
        if vectors.len() != inputs.len() {
            return Err(Error::Embedding(format!(
                "embedder returned {} vectors for {} inputs",
                vectors.len(),
                inputs.len()
            )));
        }

        let query = &vectors[0];
        let mut ranked: Vec<RankedStyle> = candidates
            .iter()
            .zip(&vectors[1..])
            .map(|(name, vector)| RankedStyle {
                name: name.clone(),
                score: query.cosine_similarity(vector),
            })
            .collect();

        // Stable sort: equal scores keep candidate (catalog) order.
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(top_k);

        Ok(ranked)
    }
}
