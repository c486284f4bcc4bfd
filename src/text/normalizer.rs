//! The cleaning stage in front of the vectorizer.

use crate::text::lemmatizer::Lemmatizer;
use crate::text::resources::Resources;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// A run of one-or-more non-word characters (word = alphanumeric or underscore).
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

/// Normalizes raw text into the cleaned form the vectorizer was fitted on.
///
/// The steps run in a fixed order: lowercase, split on non-word runs, keep
/// alphabetic-only tokens, drop stopwords, lemmatize, join with single
/// spaces. Pure and deterministic for a fixed resource set, and idempotent
/// on its own output.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: HashSet<String>,
    lemmatizer: Lemmatizer,
}

impl TextNormalizer {
    /// Build a normalizer from a loaded resource set.
    pub fn new(resources: Resources) -> Self {
        Self {
            stopwords: resources.stopwords,
            lemmatizer: Lemmatizer::new(resources.lemma_exceptions),
        }
    }

    /// Clean `text`. Returns the empty string when no tokens survive.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let tokens: Vec<String> = NON_WORD
            .split(&lowered)
            .filter(|token| !token.is_empty() && token.chars().all(char::is_alphabetic))
            .filter(|token| !self.stopwords.contains(*token))
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect();
        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::new(Resources::builtin())
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            normalizer().normalize("I absolutely LOVE this course!"),
            "absolutely love course"
        );
    }

    #[test]
    fn drops_numeric_and_mixed_tokens() {
        assert_eq!(normalizer().normalize("room 101 is 2nd best"), "room best");
    }

    #[test]
    fn splits_on_runs_of_nonword_characters() {
        assert_eq!(
            normalizer().normalize("well---done,,,indeed"),
            "well done indeed"
        );
    }

    #[test]
    fn degenerate_inputs_normalize_to_empty() {
        let normalizer = normalizer();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("?!... 42 --"), "");
        assert_eq!(normalizer.normalize("the and of to"), "");
    }

    #[test]
    fn lemmatizes_surviving_tokens() {
        assert_eq!(
            normalizer().normalize("Wolves ate the berries."),
            "wolf ate berry"
        );
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let normalizer = normalizer();
        for input in [
            "I absolutely love this course!",
            "Wolves ate the berries.",
            "The staff was rude and unhelpful.",
            "",
        ] {
            let once = normalizer.normalize(input);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }
}
