//! Artifact and resource loading utilities.
//!
//! This module provides loaders for the on-disk inputs the pipeline consumes:
//! - Vectorizer artifact (JSON)
//! - Classifier artifact (safetensors)
//! - Stopword list and lemma exception dictionary (plain text)
//!
//! ## Main Types
//!
//! - [`VectorizerLoader`] - Loads the fitted TF-IDF vectorizer
//! - [`ClassifierLoader`] - Loads the trained linear classifier
//! - [`StopwordListLoader`] - Loads a stopword list override
//! - [`LemmaExceptionsLoader`] - Loads a lemma dictionary override
//!
//! All loaders fail fast and carry the offending path in the error message;
//! a broken artifact should stop the process at startup, not at the first
//! prediction.

use crate::error::{PipelineError, Result};
use crate::models::{LinearClassifier, TfidfArtifact, TfidfVectorizer};
use crate::text::resources::{parse_lemma_exceptions, parse_stopwords};
use candle_core::Device;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use tracing::debug;

/// Loads the fitted TF-IDF vectorizer from its JSON artifact.
#[derive(Debug, Clone)]
pub struct VectorizerLoader {
    /// Artifact path.
    pub path: PathBuf,
}

impl VectorizerLoader {
    /// Loader for the artifact at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read, parse, and validate the artifact.
    pub fn load(&self) -> Result<TfidfVectorizer> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            PipelineError::Artifact(format!(
                "failed to read vectorizer artifact {}: {e}",
                self.path.display()
            ))
        })?;
        let artifact: TfidfArtifact = serde_json::from_str(&raw).map_err(|e| {
            PipelineError::Artifact(format!(
                "failed to parse vectorizer artifact {}: {e}",
                self.path.display()
            ))
        })?;
        let vectorizer = TfidfVectorizer::from_artifact(artifact)?;
        debug!(
            path = %self.path.display(),
            vocabulary = vectorizer.vocab_size(),
            "vectorizer artifact loaded"
        );
        Ok(vectorizer)
    }
}

/// Loads the trained linear classifier from its safetensors artifact.
#[derive(Debug, Clone)]
pub struct ClassifierLoader {
    /// Artifact path.
    pub path: PathBuf,
}

impl ClassifierLoader {
    /// Loader for the artifact at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the tensor map onto `device` and assemble the classifier.
    pub fn load(&self, device: &Device) -> Result<LinearClassifier> {
        let tensors = candle_core::safetensors::load(&self.path, device).map_err(|e| {
            PipelineError::Artifact(format!(
                "failed to read classifier artifact {}: {e}",
                self.path.display()
            ))
        })?;
        let classifier = LinearClassifier::from_tensor_map(tensors)?;
        debug!(
            path = %self.path.display(),
            classes = classifier.n_classes(),
            features = classifier.in_features(),
            "classifier artifact loaded"
        );
        Ok(classifier)
    }
}

/// Loads a stopword list override file (one word per line).
#[derive(Debug, Clone)]
pub struct StopwordListLoader {
    /// Resource path.
    pub path: PathBuf,
}

impl StopwordListLoader {
    /// Loader for the list at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the list.
    pub fn load(&self) -> Result<HashSet<String>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            PipelineError::Resource(format!(
                "failed to read stopword list {}: {e}",
                self.path.display()
            ))
        })?;
        Ok(parse_stopwords(&raw))
    }
}

/// Loads a lemma exception dictionary override file (`form lemma` per line).
#[derive(Debug, Clone)]
pub struct LemmaExceptionsLoader {
    /// Resource path.
    pub path: PathBuf,
}

impl LemmaExceptionsLoader {
    /// Loader for the dictionary at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the dictionary.
    pub fn load(&self) -> Result<HashMap<String, String>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            PipelineError::Resource(format!(
                "failed to read lemma dictionary {}: {e}",
                self.path.display()
            ))
        })?;
        Ok(parse_lemma_exceptions(&raw))
    }
}
