//! Gold standard keyword parsing
//!
//! Annotated keyword files hold phrases separated by `;` with words
//! separated by spaces. Phrases are broken into unigrams, so multi-word
//! phrase identity is lost; hyphens inside words are kept.

use super::normalizer::CleanTextNormalizer;
use rustc_hash::FxHashSet;

/// Parses annotated keyword files into unique stemmed unigrams
#[derive(Debug)]
pub struct GoldKeywordParser<'a> {
    normalizer: &'a CleanTextNormalizer,
}

impl<'a> GoldKeywordParser<'a> {
    /// Share stopwords and stemmer with the abstract normalizer
    pub fn new(normalizer: &'a CleanTextNormalizer) -> Self {
        Self { normalizer }
    }

    /// Parse one keyword file's text
    ///
    /// Returns unique stems in order of first appearance.
    pub fn parse(&self, text: &str) -> Vec<String> {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

        let mut seen = FxHashSet::default();
        text.split(';')
            .flat_map(|phrase| phrase.trim().split(' '))
            .filter(|word| !word.is_empty())
            .filter(|word| !self.normalizer.stopwords().is_stopword(word))
            .map(|word| self.normalizer.stem(word))
            .filter(|stem| seen.insert(stem.clone()))
            .collect()
    }
}
