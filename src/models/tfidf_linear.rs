//! The artifact-backed sentiment model: fitted TF-IDF features fed into a
//! trained linear head.

use crate::error::{PipelineError, Result};
use crate::loaders::{ClassifierLoader, VectorizerLoader};
use crate::models::{LinearClassifier, TfidfVectorizer};
use crate::pipelines::cache::ModelOptions;
use crate::pipelines::sentiment::model::SentimentModel;
use crate::pipelines::sentiment::pipeline::Sentiment;
use crate::text::{ResourceSource, TextNormalizer};
use candle_core::Device;
use std::path::{Path, PathBuf};
use tracing::info;

/// Locations of the two exported artifacts plus the language resources to
/// normalize with.
#[derive(Debug, Clone)]
pub struct TfidfLinearOptions {
    /// Path to the vectorizer JSON artifact.
    pub vectorizer: PathBuf,
    /// Path to the classifier safetensors artifact.
    pub classifier: PathBuf,
    /// Stopword list and lemma dictionary source.
    pub resources: ResourceSource,
}

impl TfidfLinearOptions {
    /// Conventional artifact layout: `<dir>/tfidf_vectorizer.json` and
    /// `<dir>/classifier.safetensors`, with the builtin language resources.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vectorizer: dir.join("tfidf_vectorizer.json"),
            classifier: dir.join("classifier.safetensors"),
            resources: ResourceSource::Builtin,
        }
    }

    /// Replace the builtin language resources with an override directory.
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources = ResourceSource::Dir(dir.into());
        self
    }
}

impl ModelOptions for TfidfLinearOptions {
    fn cache_key(&self) -> String {
        format!(
            "tfidf-linear-{}-{}",
            self.vectorizer.display(),
            self.classifier.display()
        )
    }
}

/// TF-IDF vectorizer + linear classifier, loaded once and shared.
#[derive(Clone)]
pub struct TfidfLinearModel {
    vectorizer: TfidfVectorizer,
    classifier: LinearClassifier,
    device: Device,
}

impl TfidfLinearModel {
    /// Load both artifacts and check that they agree on the feature width
    /// and on the three-class label table.
    pub fn new(options: TfidfLinearOptions, device: Device) -> Result<Self> {
        let vectorizer = VectorizerLoader::new(&options.vectorizer).load()?;
        let classifier = ClassifierLoader::new(&options.classifier).load(&device)?;

        if classifier.in_features() != vectorizer.vocab_size() {
            return Err(PipelineError::Artifact(format!(
                "artifact mismatch: classifier expects {} features, vectorizer produces {}",
                classifier.in_features(),
                vectorizer.vocab_size()
            )));
        }
        if classifier.n_classes() != Sentiment::ALL.len() {
            return Err(PipelineError::Artifact(format!(
                "artifact mismatch: classifier has {} classes, label table has {}",
                classifier.n_classes(),
                Sentiment::ALL.len()
            )));
        }

        info!(
            vocabulary = vectorizer.vocab_size(),
            classes = classifier.n_classes(),
            "sentiment artifacts loaded"
        );
        Ok(Self {
            vectorizer,
            classifier,
            device,
        })
    }
}

impl SentimentModel for TfidfLinearModel {
    type Options = TfidfLinearOptions;

    fn new(options: Self::Options, device: Device) -> Result<Self> {
        TfidfLinearModel::new(options, device)
    }

    fn predict(&self, cleaned: &str) -> Result<u32> {
        let features = self.vectorizer.transform(cleaned, &self.device)?;
        self.classifier.predict(&features)
    }

    fn predict_proba(&self, cleaned: &str) -> Result<Vec<f32>> {
        let features = self.vectorizer.transform(cleaned, &self.device)?;
        self.classifier.predict_proba(&features)
    }

    fn get_normalizer(options: Self::Options) -> Result<TextNormalizer> {
        Ok(TextNormalizer::new(options.resources.load()?))
    }

    fn device(&self) -> &Device {
        &self.device
    }
}
