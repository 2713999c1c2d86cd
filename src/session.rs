//! Summarizer session state
//!
//! A [`SummarizerSession`] owns the state of one summarizer form: the input
//! text, the requested sentence count and the last result. Every change is
//! saved through the injected [`KeyValueStore`] and can be restored later.
//!
//! Requests are ticketed. A caller that runs the summarizer off the main
//! thread takes a [`RequestTicket`] with [`SummarizerSession::begin`], runs
//! it anywhere, and hands the outcome back to
//! [`SummarizerSession::complete`]. Outcomes from tickets that were
//! superseded by a newer `begin` are discarded.

use crate::errors::Result;
use crate::store::KeyValueStore;
use crate::summarizer::Summarizer;
use crate::types::{SummaryOutcome, SummaryStats};

/// Smallest sentence count a session accepts
pub const MIN_SENTENCES: usize = 1;
/// Largest sentence count a session accepts
pub const MAX_SENTENCES: usize = 10;
/// Sentence count used when nothing has been saved
pub const DEFAULT_SENTENCES: usize = 3;

const KEY_INPUT: &str = "summarizer.input";
const KEY_LENGTH: &str = "summarizer.length";
const KEY_OUTPUT: &str = "summarizer.output";

/// A snapshot of one summarization request
#[derive(Debug, Clone)]
pub struct RequestTicket {
    generation: u64,
    document: String,
    sentence_count: usize,
}

impl RequestTicket {
    /// Monotonic request number; later tickets have larger values
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run the request; safe to call from any thread
    pub fn run(&self, summarizer: &Summarizer) -> SummaryOutcome {
        summarizer.summarize_n(&self.document, self.sentence_count)
    }
}

/// What [`SummarizerSession::complete`] did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The outcome became the session's current result
    Applied,
    /// A newer request had started; the outcome was dropped
    Stale,
}

/// Persistent state of a summarizer form
#[derive(Debug)]
pub struct SummarizerSession<S> {
    store: S,
    summarizer: Summarizer,
    input: String,
    sentence_count: usize,
    output: String,
    last: Option<SummaryOutcome>,
    generation: u64,
}

impl<S: KeyValueStore> SummarizerSession<S> {
    /// A fresh session with default state
    pub fn new(store: S) -> Self {
        Self::with_summarizer(store, Summarizer::new())
    }

    /// A fresh session that summarizes with `summarizer`
    pub fn with_summarizer(store: S, summarizer: Summarizer) -> Self {
        Self {
            store,
            summarizer,
            input: String::new(),
            sentence_count: DEFAULT_SENTENCES,
            output: String::new(),
            last: None,
            generation: 0,
        }
    }

    /// A session restored from whatever `store` holds
    ///
    /// A saved sentence count that does not parse falls back to the default.
    pub fn restore(store: S) -> Result<Self> {
        let mut session = Self::new(store);
        if let Some(input) = session.store.load(KEY_INPUT)? {
            session.input = input;
        }
        if let Some(raw) = session.store.load(KEY_LENGTH)? {
            match raw.trim().parse::<usize>() {
                Ok(n) => session.sentence_count = clamp_sentences(n),
                Err(_) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(value = %raw, "ignoring unparseable saved sentence count");
                }
            }
        }
        if let Some(output) = session.store.load(KEY_OUTPUT)? {
            session.output = output;
        }
        Ok(session)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Text of the last applied summary (empty if none)
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Outcome of the last applied request in this process
    pub fn last_outcome(&self) -> Option<&SummaryOutcome> {
        self.last.as_ref()
    }

    /// Word counts for the current input and output
    pub fn stats(&self) -> SummaryStats {
        SummaryStats::measure(&self.input, &self.output)
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Replace the input text; pending tickets become stale
    pub fn set_input(&mut self, input: impl Into<String>) -> Result<()> {
        self.generation += 1;
        self.input = input.into();
        self.store.save(KEY_INPUT, &self.input)
    }

    /// Set the sentence count, clamped to `MIN_SENTENCES..=MAX_SENTENCES`.
    /// Returns the value actually stored. Pending tickets become stale.
    pub fn set_sentence_count(&mut self, n: usize) -> Result<usize> {
        self.generation += 1;
        self.sentence_count = clamp_sentences(n);
        self.store
            .save(KEY_LENGTH, &self.sentence_count.to_string())?;
        Ok(self.sentence_count)
    }

    /// Clear input and output
    pub fn clear(&mut self) -> Result<()> {
        self.last = None;
        self.set_input(String::new())?;
        self.set_output(String::new())
    }

    /// Start a request for the current input; supersedes any earlier ticket
    pub fn begin(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket {
            generation: self.generation,
            document: self.input.clone(),
            sentence_count: self.sentence_count,
        }
    }

    /// Apply `outcome` if `ticket` is still the latest request
    pub fn complete(
        &mut self,
        ticket: &RequestTicket,
        outcome: SummaryOutcome,
    ) -> Result<Completion> {
        if ticket.generation != self.generation {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "dropping stale summary"
            );
            return Ok(Completion::Stale);
        }
        let text = outcome.text().unwrap_or_default().to_string();
        self.last = Some(outcome);
        self.set_output(text)?;
        Ok(Completion::Applied)
    }

    /// Summarize the current input synchronously
    pub fn submit(&mut self) -> Result<SummaryOutcome> {
        let ticket = self.begin();
        let outcome = ticket.run(&self.summarizer);
        self.complete(&ticket, outcome.clone())?;
        Ok(outcome)
    }

    fn set_output(&mut self, output: String) -> Result<()> {
        self.output = output;
        self.store.save(KEY_OUTPUT, &self.output)
    }
}

fn clamp_sentences(n: usize) -> usize {
    n.clamp(MIN_SENTENCES, MAX_SENTENCES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JsonFileStore, MemoryStore};

    const DOC: &str = "Bees pollinate flowering plants across the meadow. \
        Honey bees live in large colonies with one queen. \
        Some plants depend entirely on bees for pollination.";

    #[test]
    fn test_new_session_defaults() {
        let session = SummarizerSession::new(MemoryStore::new());
        assert_eq!(session.input(), "");
        assert_eq!(session.sentence_count(), DEFAULT_SENTENCES);
        assert_eq!(session.output(), "");
        assert!(session.last_outcome().is_none());
    }

    #[test]
    fn test_sentence_count_is_clamped_and_saved() {
        let mut session = SummarizerSession::new(MemoryStore::new());
        assert_eq!(session.set_sentence_count(0).unwrap(), 1);
        assert_eq!(session.set_sentence_count(42).unwrap(), 10);
        assert_eq!(session.set_sentence_count(4).unwrap(), 4);
        assert_eq!(
            session.store().load("summarizer.length").unwrap().as_deref(),
            Some("4")
        );
    }

    #[test]
    fn test_submit_saves_output() {
        let mut session = SummarizerSession::new(MemoryStore::new());
        session.set_input(DOC).unwrap();
        session.set_sentence_count(1).unwrap();

        let outcome = session.submit().unwrap();
        assert_eq!(outcome.summary().unwrap().sentence_count(), 1);

        let output = session.output().to_string();
        assert!(!output.is_empty());
        assert_eq!(
            session.store().load("summarizer.output").unwrap(),
            Some(output)
        );
    }

    #[test]
    fn test_submit_without_valid_sentences() {
        let mut session = SummarizerSession::new(MemoryStore::new());
        session.set_input("Too short.").unwrap();
        assert!(session.submit().unwrap().is_empty());
        assert_eq!(session.output(), "");
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut session = SummarizerSession::new(MemoryStore::new());
        session.set_input(DOC).unwrap();
        let old = session.begin();

        session.set_input("A completely different document about rivers and lakes.").unwrap();
        let new = session.begin();

        let old_outcome = old.run(session.summarizer());
        let new_outcome = new.run(session.summarizer());

        assert_eq!(session.complete(&new, new_outcome).unwrap(), Completion::Applied);
        assert_eq!(session.complete(&old, old_outcome).unwrap(), Completion::Stale);
        assert!(session.output().contains("rivers"));
        assert!(new.generation() > old.generation());
    }

    #[test]
    fn test_editing_input_invalidates_pending_ticket() {
        let mut session = SummarizerSession::new(MemoryStore::new());
        session.set_input(DOC).unwrap();
        let ticket = session.begin();

        session.set_input("Rivers carry sediment down to the sea every year.").unwrap();
        let outcome = ticket.run(session.summarizer());

        assert_eq!(session.complete(&ticket, outcome).unwrap(), Completion::Stale);
        assert_eq!(session.output(), "");
        assert_eq!(session.store().load("summarizer.output").unwrap(), None);
        assert!(session.last_outcome().is_none());
    }

    #[test]
    fn test_changing_length_invalidates_pending_ticket() {
        let mut session = SummarizerSession::new(MemoryStore::new());
        session.set_input(DOC).unwrap();
        let ticket = session.begin();

        session.set_sentence_count(1).unwrap();
        let outcome = ticket.run(session.summarizer());
        assert_eq!(session.complete(&ticket, outcome).unwrap(), Completion::Stale);

        let fresh = session.begin();
        let outcome = fresh.run(session.summarizer());
        assert_eq!(session.complete(&fresh, outcome).unwrap(), Completion::Applied);
        assert_eq!(session.last_outcome().unwrap().summary().unwrap().sentence_count(), 1);
    }

    #[test]
    fn test_ticket_runs_on_worker_thread() {
        let mut session = SummarizerSession::new(MemoryStore::new());
        session.set_input(DOC).unwrap();
        let ticket = session.begin();
        let summarizer = session.summarizer().clone();

        let handle = {
            let ticket = ticket.clone();
            std::thread::spawn(move || ticket.run(&summarizer))
        };
        let outcome = handle.join().unwrap();

        assert_eq!(session.complete(&ticket, outcome).unwrap(), Completion::Applied);
        assert!(!session.output().is_empty());
    }

    #[test]
    fn test_clear_invalidates_pending_ticket() {
        let mut session = SummarizerSession::new(MemoryStore::new());
        session.set_input(DOC).unwrap();
        let ticket = session.begin();
        session.clear().unwrap();

        let outcome = ticket.run(session.summarizer());
        assert_eq!(session.complete(&ticket, outcome).unwrap(), Completion::Stale);
        assert_eq!(session.input(), "");
        assert_eq!(session.output(), "");
    }

    #[test]
    fn test_restore_from_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let summary = {
            let mut session = SummarizerSession::new(JsonFileStore::open(&path).unwrap());
            session.set_input(DOC).unwrap();
            session.set_sentence_count(2).unwrap();
            session.submit().unwrap();
            session.output().to_string()
        };

        let restored = SummarizerSession::restore(JsonFileStore::open(&path).unwrap()).unwrap();
        assert_eq!(restored.input(), DOC);
        assert_eq!(restored.sentence_count(), 2);
        assert_eq!(restored.output(), summary);
        assert!(restored.last_outcome().is_none());
    }

    #[test]
    fn test_restore_ignores_bad_length() {
        let mut store = MemoryStore::new();
        store.save("summarizer.length", "many").unwrap();
        let session = SummarizerSession::restore(store).unwrap();
        assert_eq!(session.sentence_count(), DEFAULT_SENTENCES);
    }

    #[test]
    fn test_restore_clamps_saved_length() {
        let mut store = MemoryStore::new();
        store.save("summarizer.length", "25").unwrap();
        let session = SummarizerSession::restore(store).unwrap();
        assert_eq!(session.sentence_count(), MAX_SENTENCES);
    }

    #[test]
    fn test_stats_follow_output() {
        let mut session = SummarizerSession::new(MemoryStore::new());
        session.set_input(DOC).unwrap();
        session.set_sentence_count(1).unwrap();
        session.submit().unwrap();
        let stats = session.stats();
        assert_eq!(stats.input_words, DOC.split_whitespace().count());
        assert!(stats.summary_words < stats.input_words);
        assert!(stats.compression > 0.0 && stats.compression < 1.0);
    }
}
