//! Sentence splitting and word tokenization
//!
//! Sentences end at runs of `.`, `!` or `?`. Words are maximal runs of word
//! characters in the lowercased text; everything else (punctuation,
//! whitespace, symbols) separates words.

use serde::{Deserialize, Serialize};

use super::stopwords::StopwordFilter;
use crate::errors::{Result, SummarizeError};
use crate::types::{Sentence, SummarizerConfig};

/// Character class that makes up a word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordChars {
    /// ASCII letters, digits and `_`. Accented and non-Latin letters act as
    /// separators.
    #[default]
    Ascii,
    /// Any Unicode alphanumeric character and `_`.
    Unicode,
}

impl WordChars {
    #[inline]
    pub fn is_word_char(self, c: char) -> bool {
        match self {
            WordChars::Ascii => c.is_ascii_alphanumeric() || c == '_',
            WordChars::Unicode => c.is_alphanumeric() || c == '_',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WordChars::Ascii => "ascii",
            WordChars::Unicode => "unicode",
        }
    }
}

#[inline]
fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split `text` into sentences whose trimmed length exceeds `min_chars`
/// characters.
///
/// A run of terminal punctuation counts as a single boundary. Short
/// fragments are dropped before indexing, so `index` counts eligible
/// sentences only.
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut fragment_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        push_fragment(&mut sentences, text, fragment_start, pos, min_chars);

        let mut end = pos + c.len_utf8();
        while let Some(&(next_pos, next)) = chars.peek() {
            if !is_terminal(next) {
                break;
            }
            end = next_pos + next.len_utf8();
            chars.next();
        }
        fragment_start = end;
    }
    push_fragment(&mut sentences, text, fragment_start, text.len(), min_chars);

    sentences
}

fn push_fragment(
    sentences: &mut Vec<Sentence>,
    text: &str,
    start: usize,
    end: usize,
    min_chars: usize,
) {
    let fragment = &text[start..end];
    let trimmed = fragment.trim_matches(is_trimmable);
    if trimmed.chars().count() <= min_chars {
        return;
    }
    let offset = start + (fragment.len() - fragment.trim_start_matches(is_trimmable).len());
    let index = sentences.len();
    sentences.push(Sentence::new(
        trimmed,
        offset,
        offset + trimmed.len(),
        index,
    ));
}

/// Whitespace plus the byte order mark, which `char::is_whitespace` excludes
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Lowercase `text` and return its words longer than `min_chars` characters.
pub fn word_tokens(text: &str, min_chars: usize, word_chars: WordChars) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !word_chars.is_word_char(c))
        .filter(|w| w.chars().count() > min_chars)
        .map(str::to_string)
        .collect()
}

/// Sentence splitter and word tokenizer with shared settings
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_sentence_chars: usize,
    min_token_chars: usize,
    word_chars: WordChars,
    stopwords: Option<StopwordFilter>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        let config = SummarizerConfig::default();
        Self {
            min_sentence_chars: config.min_sentence_chars,
            min_token_chars: config.min_token_chars,
            word_chars: config.word_chars,
            stopwords: None,
        }
    }
}

impl Tokenizer {
    /// Create a tokenizer with default settings and no stopword filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tokenizer from the relevant parts of a summarizer config.
    ///
    /// Fails with [`SummarizeError::UnknownLanguage`] when the stopword
    /// language has no list.
    pub fn from_config(config: &SummarizerConfig) -> Result<Self> {
        let stopwords = match config.stopwords.as_deref() {
            Some(language) => Some(
                StopwordFilter::for_language(language)
                    .ok_or_else(|| SummarizeError::UnknownLanguage(language.to_string()))?,
            ),
            None => None,
        };
        Ok(Self {
            min_sentence_chars: config.min_sentence_chars,
            min_token_chars: config.min_token_chars,
            word_chars: config.word_chars,
            stopwords,
        })
    }

    /// Eligible sentences of `text`
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        split_sentences(text, self.min_sentence_chars)
    }

    /// Counted words of `text`, with stopwords removed when a filter is set
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let mut tokens = word_tokens(text, self.min_token_chars, self.word_chars);
        if let Some(filter) = &self.stopwords {
            tokens.retain(|t| !filter.is_stopword(t));
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_split_on_terminal_runs() {
        let text = "First sentence here!!! Second one follows?! Third sentence ends...";
        let sentences = split_sentences(text, 10);
        assert_eq!(
            texts(&sentences),
            vec!["First sentence here", "Second one follows", "Third sentence ends"]
        );
    }

    #[test]
    fn test_short_fragments_dropped_before_indexing() {
        let text = "Ok. This sentence is long enough. Yes. Another long sentence here.";
        let sentences = split_sentences(text, 10);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[1].index, 1);
        assert_eq!(sentences[1].text, "Another long sentence here");
    }

    #[test]
    fn test_exactly_min_chars_is_dropped() {
        // "abcdefghij" is exactly 10 characters
        assert!(split_sentences("abcdefghij.", 10).is_empty());
        assert_eq!(split_sentences("abcdefghijk.", 10).len(), 1);
    }

    #[test]
    fn test_offsets_point_at_trimmed_text() {
        let text = "  Leading spaces are trimmed.   Then another sentence.";
        for s in split_sentences(text, 10) {
            assert_eq!(&text[s.start..s.end], s.text);
        }
    }

    #[test]
    fn test_no_punctuation_is_one_sentence() {
        let sentences = split_sentences("a document without any terminal marks", 10);
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_only_punctuation() {
        assert!(split_sentences("... . !!", 10).is_empty());
        assert!(split_sentences("", 10).is_empty());
    }

    #[test]
    fn test_multibyte_length_counts_chars() {
        // 10 chars but more than 10 bytes
        assert!(split_sentences("ééééééééé é.", 10).len() == 1);
        assert!(split_sentences("éééééééééé.", 10).is_empty());
    }

    #[test]
    fn test_word_tokens_strip_punctuation_and_short_words() {
        let tokens = word_tokens("The fox's den, near-by: RIVERBANK!", 3, WordChars::Ascii);
        assert_eq!(tokens, vec!["near", "riverbank"]);
    }

    #[test]
    fn test_word_tokens_ascii_splits_accented_letters() {
        // "caf", "r", "sum", "na", "vet" are all too short
        assert!(word_tokens("Café résumé naïveté", 3, WordChars::Ascii).is_empty());
        let tokens = word_tokens("Café résumé naïveté", 3, WordChars::Unicode);
        assert_eq!(tokens, vec!["café", "résumé", "naïveté"]);
    }

    #[test]
    fn test_word_tokens_keep_digits_and_underscore() {
        let tokens = word_tokens("Version 2024 of snake_case", 3, WordChars::Ascii);
        assert_eq!(tokens, vec!["version", "2024", "snake_case"]);
    }

    #[test]
    fn test_tokenizer_with_stopwords() {
        let config = SummarizerConfig::default().with_stopwords("en");
        let tokens = Tokenizer::from_config(&config).unwrap().tokens("There were foxes there");
        assert!(!tokens.iter().any(|t| t == "there"));
        assert!(tokens.iter().any(|t| t == "foxes"));
    }

    #[test]
    fn test_tokenizer_rejects_unknown_language() {
        let config = SummarizerConfig::default().with_stopwords("klingon");
        match Tokenizer::from_config(&config) {
            Err(SummarizeError::UnknownLanguage(lang)) => assert_eq!(lang, "klingon"),
            other => panic!("expected UnknownLanguage, got {other:?}"),
        }
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let text = "\u{feff}Ünïcödé wörds open this text. Then a second sentence follows.";
        let sentences = split_sentences(text, 10);
        assert_eq!(sentences[0].text, "Ünïcödé wörds open this text");
        assert_eq!(&text[sentences[0].start..sentences[0].end], sentences[0].text);
        assert_eq!(sentences.len(), 2);
    }
}
