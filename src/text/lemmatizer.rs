//! Dictionary/rule lemmatizer with the noun-default behavior of the
//! training-time cleaner.
//!
//! Lookup order: the exception dictionary first, then ordered suffix
//! detachment rules. A token matching neither passes through unchanged, so
//! already-lemmatized text is a fixed point.

use std::collections::HashMap;

/// Suffix detachment rules, tried in order; first applicable rule wins.
/// Forms the rules mishandle (irregular plurals, `-us`/`-is` nouns, short
/// stems) belong in the exception dictionary instead.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ies", "y"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("s", ""),
];

/// Reduces a token to its dictionary base form.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
}

impl Lemmatizer {
    /// Build a lemmatizer over an irregular-form dictionary.
    pub fn new(exceptions: HashMap<String, String>) -> Self {
        Self { exceptions }
    }

    /// Lemmatize one lowercase token.
    pub fn lemmatize(&self, token: &str) -> String {
        if let Some(lemma) = self.exceptions.get(token) {
            return lemma.clone();
        }
        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = token.strip_suffix(suffix) {
                if !rule_applies(token, suffix) {
                    continue;
                }
                return format!("{stem}{replacement}");
            }
        }
        token.to_owned()
    }
}

fn rule_applies(token: &str, suffix: &str) -> bool {
    match suffix {
        // "ties"/"dies" detach a plain "s"; only longer -ies forms take "y".
        "ies" => token.len() > 4,
        // Keep words like "less", "campus", "basis" intact.
        "s" => {
            token.len() > 3
                && !token.ends_with("ss")
                && !token.ends_with("us")
                && !token.ends_with("is")
        }
        _ => token.len() > suffix.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::resources::Resources;

    fn lemmatizer() -> Lemmatizer {
        Lemmatizer::new(Resources::builtin().lemma_exceptions)
    }

    #[test]
    fn exceptions_win_over_rules() {
        let lemmatizer = lemmatizer();
        assert_eq!(lemmatizer.lemmatize("men"), "man");
        assert_eq!(lemmatizer.lemmatize("wolves"), "wolf");
        assert_eq!(lemmatizer.lemmatize("analyses"), "analysis");
        assert_eq!(lemmatizer.lemmatize("buses"), "bus");
    }

    #[test]
    fn suffix_rules_detach_plurals() {
        let lemmatizer = lemmatizer();
        assert_eq!(lemmatizer.lemmatize("courses"), "course");
        assert_eq!(lemmatizer.lemmatize("berries"), "berry");
        assert_eq!(lemmatizer.lemmatize("classes"), "class");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("dishes"), "dish");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("ties"), "tie");
    }

    #[test]
    fn guards_keep_short_and_rule_resistant_forms() {
        let lemmatizer = lemmatizer();
        for token in ["gas", "bus", "less", "campus", "tennis", "is"] {
            assert_eq!(lemmatizer.lemmatize(token), token);
        }
    }

    #[test]
    fn lemmatization_is_idempotent() {
        let lemmatizer = lemmatizer();
        for token in ["courses", "berries", "wolves", "men", "classes", "love"] {
            let once = lemmatizer.lemmatize(token);
            assert_eq!(lemmatizer.lemmatize(&once), once);
        }
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let lemmatizer = lemmatizer();
        assert_eq!(lemmatizer.lemmatize("absolutely"), "absolutely");
        assert_eq!(lemmatizer.lemmatize("zxcvb"), "zxcvb");
    }
}
