//! Stopword filtering
//!
//! Frequency scoring counts every word longer than three characters by
//! default. Profiles can opt into dropping common function words ("there",
//! "which", "would") so they do not inflate sentence scores. Lists come from
//! the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Language codes accepted by [`StopwordFilter::for_language`]
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "ru", "sv", "no", "da", "fi", "hu", "tr", "pl", "ar",
];

/// A set of lowercase words to exclude from frequency counts
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Stopwords for `language`, or `None` if the code is not supported
    pub fn for_language(language: &str) -> Option<Self> {
        parse_language(language).map(Self::load)
    }

    /// `word` is expected to be lowercase already, as tokens are.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load(language: LANGUAGE) -> Self {
        Self {
            stopwords: get(language).iter().map(|s| s.to_lowercase()).collect(),
        }
    }
}

/// Whether `language` names a supported stopword list
pub fn is_supported_language(language: &str) -> bool {
    parse_language(language).is_some()
}

fn parse_language(language: &str) -> Option<LANGUAGE> {
    let lang = match language.to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        "pl" | "polish" => LANGUAGE::Polish,
        "ar" | "arabic" => LANGUAGE::Arabic,
        _ => return None,
    };
    Some(lang)
}
