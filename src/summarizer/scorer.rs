//! Sentence scoring
//!
//! A sentence's score is the mean document frequency of its counted words.
//! Sentences in the leading share of the pool are multiplied by a position
//! bonus, since openings tend to carry the topic.

use super::frequency::FrequencyTable;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Sentence, SummarizerConfig};

/// Scores sentences against a frequency table
#[derive(Debug, Clone, Copy)]
pub struct SentenceScorer {
    lead_fraction: f64,
    lead_bonus: f64,
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl SentenceScorer {
    /// Create a scorer with an explicit lead share and bonus
    pub fn new(lead_fraction: f64, lead_bonus: f64) -> Self {
        Self {
            lead_fraction,
            lead_bonus,
        }
    }

    /// Create a scorer from the position settings of `config`
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new(config.lead_fraction, config.lead_bonus)
    }

    /// Number of leading sentences that receive the bonus:
    /// `floor(lead_fraction * pool_size)`
    pub fn lead_cutoff(&self, pool_size: usize) -> usize {
        let cutoff = (self.lead_fraction * pool_size as f64).floor();
        if cutoff.is_finite() && cutoff > 0.0 {
            (cutoff as usize).min(pool_size)
        } else {
            0
        }
    }

    /// Mean frequency of `tokens`; 0 for a sentence with no counted words
    pub fn density(tokens: &[String], table: &FrequencyTable) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let sum: u64 = tokens.iter().map(|t| u64::from(table.count(t))).sum();
        sum as f64 / tokens.len() as f64
    }

    /// Fill in `score` for every sentence in the pool
    pub fn score(&self, sentences: &mut [Sentence], table: &FrequencyTable, tokenizer: &Tokenizer) {
        let cutoff = self.lead_cutoff(sentences.len());
        for sentence in sentences.iter_mut() {
            let tokens = tokenizer.tokens(&sentence.text);
            let mut score = Self::density(&tokens, table);
            if sentence.index < cutoff {
                score *= self.lead_bonus;
            }
            sentence.score = score;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_cutoff_rounds_down() {
        let scorer = SentenceScorer::default();
        assert_eq!(scorer.lead_cutoff(1), 0);
        assert_eq!(scorer.lead_cutoff(3), 0);
        assert_eq!(scorer.lead_cutoff(4), 1);
        assert_eq!(scorer.lead_cutoff(10), 3);
        assert_eq!(scorer.lead_cutoff(20), 6);
    }

    #[test]
    fn test_lead_cutoff_degenerate_fractions() {
        assert_eq!(SentenceScorer::new(0.0, 1.5).lead_cutoff(10), 0);
        assert_eq!(SentenceScorer::new(1.0, 1.5).lead_cutoff(10), 10);
        assert_eq!(SentenceScorer::new(f64::NAN, 1.5).lead_cutoff(10), 0);
        assert_eq!(SentenceScorer::new(2.0, 1.5).lead_cutoff(10), 10);
    }

    #[test]
    fn test_density() {
        let table = FrequencyTable::from_tokens(["fox", "fox", "dog"]);
        let tokens = vec!["fox".to_string(), "dog".to_string()];
        assert!((SentenceScorer::density(&tokens, &table) - 1.5).abs() < 1e-9);
        assert_eq!(SentenceScorer::density(&[], &table), 0.0);
    }

    #[test]
    fn test_score_applies_bonus_to_leading_sentences() {
        let tokenizer = Tokenizer::new();
        let mut sentences: Vec<Sentence> = (0..4)
            .map(|i| Sentence::new("repeated words here", 0, 0, i))
            .collect();
        let table = FrequencyTable::from_tokens(["repeated", "words", "here"]);

        SentenceScorer::default().score(&mut sentences, &table, &tokenizer);

        // pool of 4 -> floor(1.2) = 1 leading sentence
        assert!((sentences[0].score - 1.5).abs() < 1e-9);
        for s in &sentences[1..] {
            assert!((s.score - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sentence_without_counted_words_scores_zero() {
        let tokenizer = Tokenizer::new();
        let mut sentences = vec![Sentence::new("a an the of to is", 0, 0, 0)];
        let table = FrequencyTable::new();
        SentenceScorer::default().score(&mut sentences, &table, &tokenizer);
        assert_eq!(sentences[0].score, 0.0);
    }
}
