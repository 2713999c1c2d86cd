//! Crate-wide error type

use thiserror::Error;

use crate::profile::ProfileError;

/// Errors produced by textdigest.
///
/// The summarization algorithm itself only ever reports [`EmptyInput`];
/// the remaining variants come from the surrounding layers (profiles,
/// stores, I/O).
///
/// [`EmptyInput`]: SummarizeError::EmptyInput
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The document contains no eligible sentence.
    #[error("no valid sentences found")]
    EmptyInput,

    /// A summary profile failed validation.
    #[error("invalid summary profile: {}", join_errors(.0))]
    InvalidProfile(Vec<ProfileError>),

    /// No stopword list exists for the configured language.
    #[error("no stopword list for \"{0}\"")]
    UnknownLanguage(String),

    /// The document exceeds the configured `runtime.max_chars` limit.
    #[error("input has {chars} characters, exceeding the limit of {limit}")]
    InputTooLarge { chars: usize, limit: usize },

    /// A key-value store could not be read or written.
    #[error("store error at {path}: {message}")]
    Store { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn join_errors(errors: &[ProfileError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SummarizeError>;
