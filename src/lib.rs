//! Three-class sentiment classification over exported artifacts.
//!
//! Classifies free text as `negative`, `neutral`, or `positive` using two
//! artifacts produced by an offline training run - a fitted TF-IDF
//! vectorizer and a trained linear classifier - and previews uploaded CSV
//! data as a table. Inference is synchronous and local; artifacts load once
//! per process and are reused by every pipeline built afterwards.
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

#![deny(missing_docs)]

// ============ Internal API ============

pub(crate) mod loaders;
pub(crate) mod models;
pub(crate) mod pipelines;

// ============ Public API ============

pub mod error;
pub mod text;

pub use pipelines::{sentiment, table_preview};
