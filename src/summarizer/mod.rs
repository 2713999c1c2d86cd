//! Summarization components
//!
//! Provides extractive summarization by word-frequency scoring:
//! split sentences, count words across the whole document, score each
//! sentence by its mean word frequency (with a bonus for early sentences),
//! keep the best ones in document order.

pub mod frequency;
pub mod scorer;
pub mod selector;

use crate::errors::Result;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::{Summary, SummarizerConfig, SummaryOutcome};
use frequency::FrequencyTable;
use scorer::SentenceScorer;
use selector::{render, SentenceSelector};

/// Frequency-scored extractive summarizer
///
/// Stateless between calls; one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    tokenizer: Tokenizer,
    scorer: SentenceScorer,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a new summarizer with default config
    pub fn new() -> Self {
        Self {
            config: SummarizerConfig::default(),
            tokenizer: Tokenizer::new(),
            scorer: SentenceScorer::default(),
        }
    }

    /// Create with custom config
    ///
    /// Fails when `config.stopwords` names a language without a stopword list.
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::from_config(&config)?,
            scorer: SentenceScorer::from_config(&config),
            config,
        })
    }

    /// The configuration this summarizer was built with
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize using the configured sentence count
    pub fn summarize(&self, document: &str) -> SummaryOutcome {
        self.summarize_n(document, self.config.sentence_count)
    }

    /// Summarize down to at most `sentence_count` sentences
    pub fn summarize_n(&self, document: &str, sentence_count: usize) -> SummaryOutcome {
        let mut sentences = {
            trace_stage!("split");
            self.tokenizer.sentences(document)
        };
        if sentences.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(chars = document.len(), "no eligible sentences");
            return SummaryOutcome::NoValidSentences;
        }

        let table = {
            trace_stage!("frequency");
            FrequencyTable::from_tokens(self.tokenizer.tokens(document))
        };

        {
            trace_stage!("score");
            self.scorer.score(&mut sentences, &table, &self.tokenizer);
        }

        let selected = {
            trace_stage!("select");
            SentenceSelector::new()
                .with_num_sentences(sentence_count)
                .select(&sentences)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            pool = sentences.len(),
            distinct_words = table.len(),
            requested = sentence_count,
            selected = selected.len(),
            "summarized document"
        );

        SummaryOutcome::Summary(Summary {
            text: render(&selected),
            pool_size: sentences.len(),
            sentences: selected,
        })
    }
}
