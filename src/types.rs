//! Core types shared across the summarization pipeline

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizeError};
use crate::nlp::tokenizer::WordChars;

/// A sentence from the source document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    /// Trimmed sentence text, without its terminal punctuation
    pub text: String,
    /// Byte offset of the trimmed text in the document
    pub start: usize,
    /// Byte offset one past the end of the trimmed text
    pub end: usize,
    /// Position in the pool of eligible sentences
    pub index: usize,
    /// Frequency score, including any position bonus
    pub score: f64,
}

impl Sentence {
    /// Create an unscored sentence spanning `start..end` of the document
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            score: 0.0,
        }
    }

    /// Sentence text with a terminal period, as it appears in a summary
    pub fn rendered(&self) -> String {
        if self.text.ends_with(['.', '!', '?']) {
            self.text.clone()
        } else {
            format!("{}.", self.text)
        }
    }
}

/// Configuration for the summarizer
///
/// The defaults reproduce the reference scoring exactly; the knobs exist for
/// profiles and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences to keep (0 is treated as 1)
    pub sentence_count: usize,
    /// Fragments of at most this many characters are not sentences
    pub min_sentence_chars: usize,
    /// Words of at most this many characters are not counted
    pub min_token_chars: usize,
    /// Share of the sentence pool, from the start, that receives the bonus
    pub lead_fraction: f64,
    /// Score multiplier for leading sentences
    pub lead_bonus: f64,
    /// Which characters make up a word
    pub word_chars: WordChars,
    /// Optional stopword language (e.g. `"en"`); `None` counts every word
    pub stopwords: Option<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            sentence_count: 3,
            min_sentence_chars: 10,
            min_token_chars: 3,
            lead_fraction: 0.3,
            lead_bonus: 1.5,
            word_chars: WordChars::Ascii,
            stopwords: None,
        }
    }
}

impl SummarizerConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of sentences to keep
    pub fn with_sentence_count(mut self, n: usize) -> Self {
        self.sentence_count = n;
        self
    }

    /// Set the length a fragment must exceed to count as a sentence
    pub fn with_min_sentence_chars(mut self, n: usize) -> Self {
        self.min_sentence_chars = n;
        self
    }

    /// Set the length a word must exceed to be counted
    pub fn with_min_token_chars(mut self, n: usize) -> Self {
        self.min_token_chars = n;
        self
    }

    /// Set the leading share of the pool that receives the bonus
    pub fn with_lead_fraction(mut self, fraction: f64) -> Self {
        self.lead_fraction = fraction;
        self
    }

    /// Set the position multiplier
    pub fn with_lead_bonus(mut self, bonus: f64) -> Self {
        self.lead_bonus = bonus;
        self
    }

    /// Set the word character class
    pub fn with_word_chars(mut self, word_chars: WordChars) -> Self {
        self.word_chars = word_chars;
        self
    }

    /// Drop stopwords of `language` before counting
    pub fn with_stopwords(mut self, language: impl Into<String>) -> Self {
        self.stopwords = Some(language.into());
        self
    }
}

/// A finished summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences joined by single spaces
    pub text: String,
    /// Selected sentences in document order, with their scores
    pub sentences: Vec<Sentence>,
    /// Number of eligible sentences in the document
    pub pool_size: usize,
}

impl Summary {
    /// Number of sentences in the summary
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// Result of a summarization call
///
/// Running out of sentences is a normal outcome, not an error, so it has its
/// own variant. Use [`SummaryOutcome::into_result`] to turn it into
/// [`SummarizeError::EmptyInput`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryOutcome {
    Summary(Summary),
    NoValidSentences,
}

impl SummaryOutcome {
    /// `true` when the document had no eligible sentence
    pub fn is_empty(&self) -> bool {
        matches!(self, SummaryOutcome::NoValidSentences)
    }

    /// The summary, if there is one
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            SummaryOutcome::Summary(summary) => Some(summary),
            SummaryOutcome::NoValidSentences => None,
        }
    }

    /// Summary text, if there is one
    pub fn text(&self) -> Option<&str> {
        self.summary().map(|s| s.text.as_str())
    }

    /// Convert into a `Result`, mapping no sentences to [`SummarizeError::EmptyInput`]
    pub fn into_result(self) -> Result<Summary> {
        match self {
            SummaryOutcome::Summary(summary) => Ok(summary),
            SummaryOutcome::NoValidSentences => Err(SummarizeError::EmptyInput),
        }
    }
}

/// Word counts before and after summarization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub input_words: usize,
    pub summary_words: usize,
    /// `summary_words / input_words`, or 0 for an empty input
    pub compression: f64,
}

impl SummaryStats {
    /// Count whitespace-separated words in `input` and `summary`
    pub fn measure(input: &str, summary: &str) -> Self {
        let input_words = input.split_whitespace().count();
        let summary_words = summary.split_whitespace().count();
        let compression = if input_words == 0 {
            0.0
        } else {
            summary_words as f64 / input_words as f64
        };
        Self {
            input_words,
            summary_words,
            compression,
        }
    }
}
