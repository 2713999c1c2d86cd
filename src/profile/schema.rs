//! Summary profile types.
//!
//! A [`SummaryProfile`] is a versioned JSON document that overrides the
//! summarizer defaults and sets runtime limits. Profiles are checked by
//! [`super::validation::ValidationEngine`] before use.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "summarizer": {
//!     "sentence_count": 4,
//!     "lead_bonus": 1.5,
//!     "stopwords": "en"
//!   },
//!   "runtime": { "max_chars": 200000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SummarizeError};
use crate::nlp::tokenizer::WordChars;
use crate::types::SummarizerConfig;

/// Current profile version.
pub const PROFILE_VERSION: u32 = 1;

/// Top-level summary profile (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryProfile {
    /// Profile version (currently `1`).
    pub v: u32,

    /// Summarizer overrides. Omitted fields keep their defaults.
    #[serde(default)]
    pub summarizer: SummarizerSection,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummaryProfile {
    fn default() -> Self {
        Self {
            v: PROFILE_VERSION,
            summarizer: SummarizerSection::default(),
            runtime: RuntimeSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

/// Optional overrides for [`SummarizerConfig`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarizerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_sentence_chars: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_token_chars: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_fraction: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_bonus: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_chars: Option<WordChars>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<String>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum document length in characters before rejecting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl RuntimeSpec {
    /// Reject `document` if it is longer than `max_chars`.
    pub fn check(&self, document: &str) -> Result<()> {
        if let Some(limit) = self.max_chars {
            let chars = document.chars().count();
            if chars > limit {
                return Err(SummarizeError::InputTooLarge { chars, limit });
            }
        }
        Ok(())
    }
}

impl SummaryProfile {
    /// Parse a profile from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a profile file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Apply the overrides on top of the default config.
    pub fn to_config(&self) -> SummarizerConfig {
        let s = &self.summarizer;
        let defaults = SummarizerConfig::default();
        SummarizerConfig {
            sentence_count: s.sentence_count.unwrap_or(defaults.sentence_count),
            min_sentence_chars: s.min_sentence_chars.unwrap_or(defaults.min_sentence_chars),
            min_token_chars: s.min_token_chars.unwrap_or(defaults.min_token_chars),
            lead_fraction: s.lead_fraction.unwrap_or(defaults.lead_fraction),
            lead_bonus: s.lead_bonus.unwrap_or(defaults.lead_bonus),
            word_chars: s.word_chars.unwrap_or(defaults.word_chars),
            stopwords: s.stopwords.clone().or(defaults.stopwords),
        }
    }
}
