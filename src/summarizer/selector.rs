//! Top-k sentence selection for summarization
//!
//! Picks the highest-scoring sentences and hands them back in document
//! order. Equal scores keep their document order, so earlier sentences win
//! ties.

use std::cmp::Ordering;

use crate::types::Sentence;

/// Score-ranked sentence selector
#[derive(Debug)]
pub struct SentenceSelector {
    /// Number of sentences to select (0 is treated as 1)
    num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self { num_sentences: 3 }
    }
}

impl SentenceSelector {
    /// Create a new selector for three sentences
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.num_sentences = n;
        self
    }

    /// How many sentences a pool of `pool_size` yields
    pub fn target(&self, pool_size: usize) -> usize {
        self.num_sentences.max(1).min(pool_size)
    }

    /// Select the best-scoring sentences, returned in document order
    pub fn select(&self, sentences: &[Sentence]) -> Vec<Sentence> {
        let mut ranked: Vec<Sentence> = sentences.to_vec();
        // `sort_by` is stable: equal scores keep document order
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(self.target(sentences.len()));

        ranked.sort_by_key(|s| s.index);
        ranked
    }
}

/// Join selected sentences into summary text
pub fn render(sentences: &[Sentence]) -> String {
    sentences
        .iter()
        .map(Sentence::rendered)
        .collect::<Vec<_>>()
        .join(" ")
}
