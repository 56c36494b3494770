//! # graph_of_words
//!
//! Unsupervised keyword extraction from short documents using the
//! graph-of-words representation, with an evaluation harness that compares
//! the extracted keywords against gold standard annotations.
//!
//! ## Methods
//!
//! - **k-core**: the main core of the word co-occurrence graph
//! - **PageRank**: the top fraction of graph nodes by PageRank score
//! - **TF-IDF**: the top fraction of terms by TF-IDF weight (baseline)
//!
//! Each method is scored per document with precision, recall and F1, then
//! macro-averaged over the corpus.

pub mod corpus;
pub mod errors;
pub mod eval;
pub mod extract;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod tfidf;
pub mod types;

// Re-export commonly used types
pub use errors::{KeywordError, Result};
pub use types::{Document, ExtractionConfig, Method};

// Re-export main functionality
pub use corpus::{load_corpus, prepare_documents, RawDocument};
pub use eval::{macro_average, score, MethodSummary, Performance};
pub use extract::{
    kcore::extract_kcore, pagerank::extract_pagerank, select_top_terms, GraphExtractor,
    KCoreExtractor, PageRankExtractor,
};
pub use graph::{build_graph, builder::GraphBuilder, csr::CsrGraph};
pub use nlp::{
    gold::GoldKeywordParser,
    normalizer::{CleanTextNormalizer, Normalizer},
    stopwords::StopwordFilter,
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::{EvaluationReport, Evaluator, ProgressLogger, ProgressObserver, RunSpec};
pub use tfidf::{TfidfMatrix, TfidfVectorizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
