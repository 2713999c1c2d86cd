//! Parallel summarization of many documents
//!
//! Each document is summarized independently on the rayon pool; results come
//! back in input order.

use rayon::prelude::*;

use crate::errors::Result;
use crate::summarizer::Summarizer;
use crate::types::{SummarizerConfig, SummaryOutcome};

/// Summarize every document with `config`
///
/// Fails before any document is read if `config` cannot build a summarizer.
pub fn summarize_batch<S>(
    documents: &[S],
    config: &SummarizerConfig,
) -> Result<Vec<SummaryOutcome>>
where
    S: AsRef<str> + Sync,
{
    let summarizer = Summarizer::with_config(config.clone())?;
    Ok(summarize_batch_with(&summarizer, documents))
}

/// Summarize every document with an existing summarizer
pub fn summarize_batch_with<S>(summarizer: &Summarizer, documents: &[S]) -> Vec<SummaryOutcome>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(documents = documents.len(), "summarizing batch");

    documents
        .par_iter()
        .map(|doc| summarizer.summarize(doc.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SummarizeError;

    #[test]
    fn test_batch_preserves_order_and_isolation() {
        let docs = vec![
            "Cats are small carnivorous mammals. They like to sleep a lot.".to_string(),
            String::new(),
            "Dogs were domesticated long ago. Dogs make loyal companions.".to_string(),
        ];
        let config = SummarizerConfig::default().with_sentence_count(1);
        let outcomes = summarize_batch(&docs, &config).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].text().unwrap().starts_with("Cats"));
        assert!(outcomes[1].is_empty());
        assert!(outcomes[2].text().unwrap().contains("Dogs"));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let docs: Vec<String> = (0..32)
            .map(|i| format!("Document number {i} talks about rivers. Rivers flow into the sea near town {i}."))
            .collect();
        let summarizer = Summarizer::new();
        let parallel = summarize_batch_with(&summarizer, &docs);
        let sequential: Vec<_> = docs.iter().map(|d| summarizer.summarize(d)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_empty_batch() {
        let docs: Vec<&str> = Vec::new();
        assert!(summarize_batch(&docs, &SummarizerConfig::default()).unwrap().is_empty());
    }

    #[test]
    fn test_batch_rejects_unknown_stopword_language() {
        let docs = ["Cats are small carnivorous mammals."];
        let config = SummarizerConfig::default().with_stopwords("klingon");
        assert!(matches!(
            summarize_batch(&docs, &config),
            Err(SummarizeError::UnknownLanguage(_))
        ));
    }
}
