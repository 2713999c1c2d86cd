//! # textdigest
//!
//! Extractive text summarization by word-frequency scoring.
//!
//! A document is split into sentences, every sentence is scored by the
//! average document-wide frequency of its words, sentences near the start
//! of the document get a position bonus, and the best-scoring sentences are
//! returned in their original order.
//!
//! ```rust
//! use textdigest::{summarize, SummaryOutcome};
//!
//! let text = "Rust is a systems programming language. It guarantees memory safety \
//!             without a garbage collector. Many teams adopt Rust for reliability.";
//! match summarize(text, 1) {
//!     SummaryOutcome::Summary(summary) => assert_eq!(summary.sentence_count(), 1),
//!     SummaryOutcome::NoValidSentences => unreachable!(),
//! }
//! ```

/// Enter a tracing span for a summarization stage (when the `tracing`
/// feature is enabled). When disabled, this is a no-op.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("summarize_stage", stage = $name).entered();
    };
}

pub mod batch;
pub mod errors;
pub mod nlp;
pub mod profile;
pub mod session;
pub mod store;
pub mod summarizer;
pub mod types;

pub use batch::summarize_batch;
pub use errors::{Result, SummarizeError};
pub use nlp::tokenizer::{Tokenizer, WordChars};
pub use profile::{SummaryProfile, ValidationEngine, ValidationReport};
pub use session::{Completion, RequestTicket, SummarizerSession};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use summarizer::Summarizer;
pub use types::{Sentence, Summary, SummarizerConfig, SummaryOutcome, SummaryStats};

/// Summarize `document` down to at most `sentence_count` sentences using the
/// default configuration.
///
/// A `sentence_count` of 0 is treated as 1. Returns
/// [`SummaryOutcome::NoValidSentences`] when the document has no sentence
/// longer than ten characters.
pub fn summarize(document: &str, sentence_count: usize) -> SummaryOutcome {
    Summarizer::new().summarize_n(document, sentence_count)
}
