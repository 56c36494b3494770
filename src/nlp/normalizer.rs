//! Text normalization
//!
//! Turns raw abstract text into the ordered token sequence the graph
//! builder consumes. The stopword list, punctuation set and stemmer are
//! all supplied at construction time.

use super::stopwords::StopwordFilter;
use rust_stemmers::{Algorithm, Stemmer};
use rustc_hash::FxHashSet;

/// ASCII punctuation except `-`, so intra-word dashes survive cleaning
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&'()*+,./:;<=>?@[\\]^_`{|}~";

/// Converts a document into normalized tokens
///
/// Implementations must preserve token order and keep duplicates; the
/// co-occurrence graph depends on both.
pub trait Normalizer {
    /// Normalize `text` into tokens.
    fn normalize(&self, text: &str) -> Vec<String>;
}

/// Lowercase, strip punctuation, drop stopwords, stem
pub struct CleanTextNormalizer {
    stopwords: StopwordFilter,
    punctuation: FxHashSet<char>,
    stemmer: Option<Stemmer>,
}

impl std::fmt::Debug for CleanTextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CleanTextNormalizer")
            .field("stopwords", &self.stopwords.len())
            .field("punctuation", &self.punctuation.len())
            .field("stemming", &self.stemmer.is_some())
            .finish()
    }
}

impl Default for CleanTextNormalizer {
    fn default() -> Self {
        Self::new(StopwordFilter::default())
    }
}

impl CleanTextNormalizer {
    /// Create a normalizer with English stemming and the default punctuation set
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            punctuation: DEFAULT_PUNCTUATION.chars().collect(),
            stemmer: Some(Stemmer::create(Algorithm::English)),
        }
    }

    /// Replace the punctuation set
    pub fn with_punctuation(mut self, punctuation: &str) -> Self {
        self.punctuation = punctuation.chars().collect();
        self
    }

    /// Replace the stemmer; `None` disables stemming
    pub fn with_stemmer(mut self, algorithm: Option<Algorithm>) -> Self {
        self.stemmer = algorithm.map(Stemmer::create);
        self
    }

    /// The stopword filter in use
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Stem a single lowercase word
    pub fn stem(&self, word: &str) -> String {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(word).into_owned(),
            None => word.to_string(),
        }
    }
}

impl Normalizer for CleanTextNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .filter(|c| !self.punctuation.contains(c))
            .collect();

        cleaned
            .split_whitespace()
            .filter(|token| !self.stopwords.is_stopword(token))
            .map(|token| self.stem(token))
            .filter(|token| !token.is_empty())
            .collect()
    }
}
