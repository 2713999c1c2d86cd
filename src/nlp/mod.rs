//! Natural Language Processing components
//!
//! This module provides sentence splitting, word tokenization and
//! optional stopword filtering.

pub mod stopwords;
pub mod tokenizer;
