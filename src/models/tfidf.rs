//! Fitted TF-IDF vectorizer, deserialized from its JSON artifact.

use crate::error::{PipelineError, Result};
use candle_core::{Device, Tensor};
use serde::Deserialize;
use std::collections::HashMap;

/// On-disk form of the vectorizer artifact:
/// `{ "vocabulary": { token: column }, "idf": [weight; V] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfArtifact {
    /// Token to feature-column mapping learned at fit time.
    pub vocabulary: HashMap<String, usize>,
    /// Per-column inverse document frequency weights.
    pub idf: Vec<f32>,
}

/// Maps cleaned text to a `(1, V)` feature tensor over the learned
/// vocabulary.
///
/// Out-of-vocabulary tokens contribute zero weight and never error.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Validate a deserialized artifact and take ownership of it.
    pub fn from_artifact(artifact: TfidfArtifact) -> Result<Self> {
        if artifact.vocabulary.len() != artifact.idf.len() {
            return Err(PipelineError::Artifact(format!(
                "vectorizer artifact mismatch: {} vocabulary entries but {} idf weights",
                artifact.vocabulary.len(),
                artifact.idf.len()
            )));
        }
        if let Some((token, &column)) = artifact
            .vocabulary
            .iter()
            .find(|(_, &column)| column >= artifact.idf.len())
        {
            return Err(PipelineError::Artifact(format!(
                "vectorizer artifact corrupt: token '{token}' maps to column {column}, \
                 vocabulary size is {}",
                artifact.idf.len()
            )));
        }
        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
        })
    }

    /// Width of the feature vectors this vectorizer produces.
    pub fn vocab_size(&self) -> usize {
        self.idf.len()
    }

    /// Transform cleaned text into an L2-normalized TF-IDF row vector.
    ///
    /// Term counts are weighted by the per-column idf and the result is
    /// scaled to unit length. Empty or all-OOV text yields the zero vector.
    pub fn transform(&self, cleaned: &str, device: &Device) -> Result<Tensor> {
        let mut weights = vec![0f32; self.idf.len()];
        for token in cleaned.split_whitespace() {
            if let Some(&column) = self.vocabulary.get(token) {
                weights[column] += self.idf[column];
            }
        }
        let norm = weights.iter().map(|w| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for w in &mut weights {
                *w /= norm;
            }
        }
        let width = weights.len();
        Ok(Tensor::from_vec(weights, (1, width), device)?)
    }
}
