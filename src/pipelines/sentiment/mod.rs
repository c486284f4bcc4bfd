//! Sentiment classification pipeline.
//!
//! Classify text as `negative`, `neutral`, or `positive` using two exported
//! artifacts: a fitted TF-IDF vectorizer and a trained linear classifier.
//! Returns both the predicted label and a confidence percentage.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sentiment_pipeline::sentiment::{SentimentPipelineBuilder, TfidfLinearOptions};
//!
//! # fn main() -> sentiment_pipeline::error::Result<()> {
//! let pipeline =
//!     SentimentPipelineBuilder::tfidf_linear(TfidfLinearOptions::from_dir("artifacts"))
//!         .build()?;
//! let result = pipeline.predict("I absolutely love this course!")?;
//!
//! // sentiment: positive (confidence: 93.27%)
//! println!(
//!     "sentiment: {} (confidence: {:.2}%)",
//!     result.sentiment, result.confidence
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Batch Inference
//!
//! Classify multiple inputs in one call:
//!
//! ```rust,no_run
//! # use sentiment_pipeline::sentiment::{SentimentPipelineBuilder, TfidfLinearOptions};
//! # fn main() -> sentiment_pipeline::error::Result<()> {
//! # let pipeline =
//! #     SentimentPipelineBuilder::tfidf_linear(TfidfLinearOptions::from_dir("artifacts"))
//! #         .build()?;
//! let reviews = &[
//!     "Best purchase I've ever made!",
//!     "Terrible quality, very disappointed.",
//!     "It's okay, nothing special.",
//! ];
//!
//! let results = pipeline.predict_batch(reviews)?;
//!
//! for (text, result) in reviews.iter().zip(results) {
//!     let r = result?;
//!     println!("{}: {} ({:.2}%)", text, r.sentiment, r.confidence);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Degenerate Input
//!
//! Input that cleans down to nothing (empty, punctuation-only, or entirely
//! stopwords) short-circuits to `neutral` with confidence `0.0` instead of
//! feeding the classifier a zero vector.

// ============ Internal API ============

pub(crate) mod builder;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::models::TfidfLinearOptions;
pub use crate::text::{ResourceSource, Resources, TextNormalizer};
pub use builder::SentimentPipelineBuilder;
pub use model::SentimentModel;
pub use pipeline::{Sentiment, SentimentPipeline, SentimentPrediction};

/// Only for generic annotations. Use [`SentimentPipelineBuilder::tfidf_linear`].
pub type TfidfLinear = crate::models::TfidfLinearModel;
