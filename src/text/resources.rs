//! One-time language resources: the stopword list and the lemma exception
//! dictionary.
//!
//! An English resource set is embedded in the crate so nothing has to be
//! downloaded; a directory of override files can replace it. Either way the
//! set is loaded explicitly at startup and treated as immutable afterwards.

use crate::error::Result;
use crate::loaders::{LemmaExceptionsLoader, StopwordListLoader};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::debug;

const BUILTIN_STOPWORDS: &str = include_str!("../../resources/stopwords_en.txt");
const BUILTIN_LEMMA_EXCEPTIONS: &str = include_str!("../../resources/lemma_exceptions_en.txt");

/// Where the normalizer's language resources come from.
#[derive(Debug, Clone, Default)]
pub enum ResourceSource {
    /// The English resource set embedded in the crate.
    #[default]
    Builtin,
    /// A directory containing `stopwords.txt` and `lemma_exceptions.txt`.
    Dir(PathBuf),
}

impl ResourceSource {
    /// Load the resource set, failing fast on a missing or unreadable
    /// override file.
    pub fn load(&self) -> Result<Resources> {
        let resources = match self {
            ResourceSource::Builtin => Resources::builtin(),
            ResourceSource::Dir(dir) => Resources::from_dir(dir)?,
        };
        debug!(
            stopwords = resources.stopwords.len(),
            lemma_exceptions = resources.lemma_exceptions.len(),
            "language resources loaded"
        );
        Ok(resources)
    }
}

/// A loaded stopword list plus lemma exception dictionary.
#[derive(Debug, Clone)]
pub struct Resources {
    pub(crate) stopwords: HashSet<String>,
    pub(crate) lemma_exceptions: HashMap<String, String>,
}

impl Resources {
    /// The English resource set embedded in the crate.
    pub fn builtin() -> Self {
        Self {
            stopwords: parse_stopwords(BUILTIN_STOPWORDS),
            lemma_exceptions: parse_lemma_exceptions(BUILTIN_LEMMA_EXCEPTIONS),
        }
    }

    /// Load `stopwords.txt` and `lemma_exceptions.txt` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let stopwords = StopwordListLoader::new(dir.join("stopwords.txt")).load()?;
        let lemma_exceptions =
            LemmaExceptionsLoader::new(dir.join("lemma_exceptions.txt")).load()?;
        Ok(Self {
            stopwords,
            lemma_exceptions,
        })
    }
}

/// One stopword per line; blank lines and `#` comments are skipped.
pub(crate) fn parse_stopwords(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

/// One `form lemma` pair per line; blank lines, `#` comments, and lines
/// without exactly two fields are skipped.
pub(crate) fn parse_lemma_exceptions(text: &str) -> HashMap<String, String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(form), Some(lemma), None) => Some((form.to_owned(), lemma.to_owned())),
                _ => None,
            }
        })
        .collect()
}
