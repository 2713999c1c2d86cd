//! Structured profile diagnostics.

use std::fmt;

use serde::Serialize;

/// Stable machine-readable code for a profile diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The `v` field names a version this crate does not understand.
    UnsupportedVersion,
    /// A numeric setting is outside its allowed range.
    OutOfRange,
    /// A runtime limit is zero or otherwise unusable.
    LimitExceeded,
    /// A stopword language code is not recognized.
    UnknownLanguage,
    /// A field is not part of the schema.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::OutOfRange => "out_of_range",
            Self::LimitExceeded => "limit_exceeded",
            Self::UnknownLanguage => "unknown_language",
            Self::UnknownField => "unknown_field",
        }
    }
}

/// A single problem found in a [`SummaryProfile`](super::schema::SummaryProfile).
///
/// `path` is a JSON pointer into the profile document (e.g.
/// `/summarizer/lead_fraction`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileError {
    pub code: ErrorCode,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ProfileError {
    pub fn new(code: ErrorCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.as_str(), self.path, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ProfileError {}
