//! Natural Language Processing components
//!
//! This module provides stopword filtering, text normalization and gold
//! keyword parsing.

pub mod gold;
pub mod normalizer;
pub mod stopwords;
