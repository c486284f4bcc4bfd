use crate::error::{PipelineError, Result};
use crate::text::TextNormalizer;

/// Interface the sentiment pipeline needs from an artifact-backed model.
///
/// `predict` and `predict_proba` mirror the fixed contract of the exported
/// artifacts. Both take text already cleaned by the pipeline's normalizer.
pub trait SentimentModel {
    /// Options describing which artifacts to load.
    type Options: std::fmt::Debug + Clone;

    /// Load the model described by `options` onto `device`.
    fn new(options: Self::Options, device: candle_core::Device) -> Result<Self>
    where
        Self: Sized;

    /// Predicted class index for cleaned text.
    fn predict(&self, cleaned: &str) -> Result<u32>;

    /// Per-class probability distribution for cleaned text.
    fn predict_proba(&self, cleaned: &str) -> Result<Vec<f32>>;

    /// Predicted class index plus its probability, read off one distribution.
    fn predict_with_confidence(&self, cleaned: &str) -> Result<(u32, f32)> {
        let probabilities = self.predict_proba(cleaned)?;
        let (index, probability) = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .ok_or_else(|| {
                PipelineError::Unexpected(
                    "model returned an empty probability distribution".to_owned(),
                )
            })?;
        Ok((index as u32, *probability))
    }

    /// Build the normalizer matching this model's training-time cleaning.
    fn get_normalizer(options: Self::Options) -> Result<TextNormalizer>;

    /// Device the model runs on.
    fn device(&self) -> &candle_core::Device;
}
