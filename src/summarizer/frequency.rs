//! Document-wide word frequency table

use rustc_hash::FxHashMap;

/// Occurrence counts of every counted word in a document
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u32>,
}

impl FrequencyTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token);
        }
        table
    }

    /// Count one occurrence of `token`
    pub fn add(&mut self, token: impl Into<String>) {
        *self.counts.entry(token.into()).or_insert(0) += 1;
    }

    /// Occurrences of `token`, 0 if never seen
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
