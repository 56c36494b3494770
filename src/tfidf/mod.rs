//! Bag-of-words TF-IDF weighting over a document collection

pub mod vectorizer;

pub use vectorizer::{TfidfMatrix, TfidfVectorizer};
