//! Text cleaning ahead of the vectorizer.
//!
//! The normalizer reproduces the cleaning the vectorizer was fitted on:
//! lowercasing, word splitting, stopword removal, and lemmatization. Its
//! language resources (stopword list, lemma exception dictionary) are loaded
//! once at startup and immutable afterwards.

pub(crate) mod lemmatizer;
pub(crate) mod normalizer;
pub(crate) mod resources;

pub use lemmatizer::Lemmatizer;
pub use normalizer::TextNormalizer;
pub use resources::{ResourceSource, Resources};
