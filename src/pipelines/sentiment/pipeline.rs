use super::model::SentimentModel;
use crate::error::{PipelineError, Result};
use crate::text::TextNormalizer;
use tracing::debug;

/// The three sentiment classes, in class-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// Class index 0.
    Negative,
    /// Class index 1.
    Neutral,
    /// Class index 2.
    Positive,
}

impl Sentiment {
    /// The label table: every class, indexed by its classifier class index.
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// Map a classifier class index to its label.
    pub fn from_index(index: u32) -> Option<Sentiment> {
        Self::ALL.get(index as usize).copied()
    }

    /// Lowercase label string.
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicted label and confidence for one input.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentPrediction {
    /// Predicted class.
    pub sentiment: Sentiment,
    /// Maximum class probability as a percentage in `[0, 100]`.
    pub confidence: f32,
}

/// Classifies free text as negative, neutral, or positive.
pub struct SentimentPipeline<M: SentimentModel> {
    pub(crate) model: M,
    pub(crate) normalizer: TextNormalizer,
}

impl<M: SentimentModel> SentimentPipeline<M> {
    /// Predict the sentiment of `text` with a confidence percentage.
    ///
    /// Input that normalizes to the empty string (empty, punctuation-only,
    /// or all stopwords) never reaches the classifier: it short-circuits to
    /// [`Sentiment::Neutral`] with confidence `0.0`.
    pub fn predict(&self, text: &str) -> Result<SentimentPrediction> {
        let cleaned = self.normalizer.normalize(text);
        if cleaned.is_empty() {
            debug!("input normalized to empty string, skipping classifier");
            return Ok(SentimentPrediction {
                sentiment: Sentiment::Neutral,
                confidence: 0.0,
            });
        }

        let (index, probability) = self.model.predict_with_confidence(&cleaned)?;
        let sentiment = Sentiment::from_index(index).ok_or_else(|| {
            PipelineError::Unexpected(format!("class index {index} outside the label table"))
        })?;
        debug!(%cleaned, %sentiment, probability, "classified input");

        Ok(SentimentPrediction {
            sentiment,
            confidence: probability * 100.0,
        })
    }

    /// Predict a batch of inputs, one result per item.
    pub fn predict_batch(&self, texts: &[&str]) -> Result<Vec<Result<SentimentPrediction>>> {
        Ok(texts.iter().map(|text| self.predict(text)).collect())
    }

    /// The normalizer applied ahead of the vectorizer.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Device the underlying model runs on.
    pub fn device(&self) -> &candle_core::Device {
        self.model.device()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_table_covers_exactly_three_classes() {
        assert_eq!(Sentiment::from_index(0), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_index(1), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::from_index(2), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_index(3), None);
    }

    #[test]
    fn labels_render_lowercase() {
        assert_eq!(Sentiment::Positive.to_string(), "positive");
        assert_eq!(Sentiment::ALL.map(Sentiment::as_str).join(" "), "negative neutral positive");
    }
}
