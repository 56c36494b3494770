//! Corpus loading
//!
//! A corpus is two directories: one file per abstract and one file of
//! `;`-separated gold keywords per abstract. Files are paired by their
//! position after sorting each directory by file name.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{KeywordError, Result};
use crate::nlp::gold::GoldKeywordParser;
use crate::nlp::normalizer::{CleanTextNormalizer, Normalizer};
use crate::types::Document;

/// An abstract and its gold keywords before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// File stem of the abstract
    pub id: String,
    /// Abstract text on a single line
    pub abstract_text: String,
    /// Gold keyword text on a single line
    pub keywords_text: String,
}

impl RawDocument {
    /// Normalize the abstract and parse the gold keywords
    pub fn prepare(&self, normalizer: &CleanTextNormalizer) -> Document {
        Document::new(
            self.id.clone(),
            normalizer.normalize(&self.abstract_text),
            GoldKeywordParser::new(normalizer).parse(&self.keywords_text),
        )
    }
}

/// Normalize a whole corpus, keeping its order
pub fn prepare_documents(raw: &[RawDocument], normalizer: &CleanTextNormalizer) -> Vec<Document> {
    raw.iter().map(|doc| doc.prepare(normalizer)).collect()
}

/// Load and pair the files of `abstracts_dir` and `keywords_dir`
pub fn load_corpus(
    abstracts_dir: impl AsRef<Path>,
    keywords_dir: impl AsRef<Path>,
) -> Result<Vec<RawDocument>> {
    let abstracts = sorted_files(abstracts_dir.as_ref())?;
    let keywords = sorted_files(keywords_dir.as_ref())?;

    if abstracts.len() != keywords.len() {
        return Err(KeywordError::CorpusMismatch {
            abstracts: abstracts.len(),
            keywords: keywords.len(),
        });
    }

    let mut out = Vec::with_capacity(abstracts.len());
    for (abstract_path, keywords_path) in abstracts.iter().zip(&keywords) {
        let id = abstract_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        out.push(RawDocument {
            id,
            abstract_text: read_flattened(abstract_path)?,
            keywords_text: read_flattened(keywords_path)?,
        });
    }

    tracing::info!(documents = out.len(), "corpus loaded");
    Ok(out)
}

/// Regular files of `dir`, sorted by file name
fn sorted_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| KeywordError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| KeywordError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read a file leniently and collapse it onto one line
fn read_flattened(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| KeywordError::io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
}
