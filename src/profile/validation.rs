//! Validation engine for summary profiles.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummaryProfile`] and collects every diagnostic into a
//! [`ValidationReport`]. It never short-circuits on the first error, so
//! users see all problems at once.
//!
//! # Quick start
//!
//! ```rust
//! use textdigest::profile::{SummaryProfile, ValidationEngine};
//!
//! let profile = SummaryProfile::from_json(r#"{ "v": 1 }"#).unwrap();
//! let report = ValidationEngine::with_defaults().validate(&profile);
//! assert!(report.is_valid());
//! ```

use std::collections::HashMap;

use serde::Serialize;

use super::errors::{ErrorCode, ProfileError};
use super::schema::{SummaryProfile, PROFILE_VERSION};
use crate::nlp::stopwords::{is_supported_language, SUPPORTED_LANGUAGES};

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: ProfileError,
}

impl ValidationDiagnostic {
    pub fn error(err: ProfileError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: ProfileError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &ProfileError> {
        self.by_severity(Severity::Error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &ProfileError> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &ProfileError> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.error)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SummaryProfile`] and returns
/// zero or more diagnostics.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"lead_bonus"`).
    fn name(&self) -> &str;

    fn validate(&self, profile: &SummaryProfile) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SummaryProfile`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(VersionRule));
        engine.add_rule(Box::new(SentenceCountRule));
        engine.add_rule(Box::new(LeadFractionRule));
        engine.add_rule(Box::new(LeadBonusRule));
        engine.add_rule(Box::new(RuntimeLimitsRule));
        engine.add_rule(Box::new(StopwordLanguageRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `profile` and return the collected report.
    pub fn validate(&self, profile: &SummaryProfile) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            let diagnostics = rule.validate(profile);
            #[cfg(feature = "tracing")]
            tracing::debug!(rule = rule.name(), found = diagnostics.len(), "profile rule ran");
            report.diagnostics.extend(diagnostics);
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Only version 1 is understood ────────────────────────────────────────

struct VersionRule;

impl ValidationRule for VersionRule {
    fn name(&self) -> &str {
        "version"
    }

    fn validate(&self, profile: &SummaryProfile) -> Vec<ValidationDiagnostic> {
        if profile.v == PROFILE_VERSION {
            return vec![];
        }
        vec![ValidationDiagnostic::error(
            ProfileError::new(
                ErrorCode::UnsupportedVersion,
                "/v",
                format!("unsupported profile version {}", profile.v),
            )
            .with_hint(format!("Set \"v\" to {PROFILE_VERSION}")),
        )]
    }
}

// ─── 2. sentence_count of 0 is accepted but treated as 1 ────────────────────

struct SentenceCountRule;

impl ValidationRule for SentenceCountRule {
    fn name(&self) -> &str {
        "sentence_count"
    }

    fn validate(&self, profile: &SummaryProfile) -> Vec<ValidationDiagnostic> {
        if profile.summarizer.sentence_count == Some(0) {
            vec![ValidationDiagnostic::warning(
                ProfileError::new(
                    ErrorCode::OutOfRange,
                    "/summarizer/sentence_count",
                    "sentence_count of 0 is treated as 1",
                )
                .with_hint("Set sentence_count to a positive value"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 3. lead_fraction within [0, 1] ─────────────────────────────────────────

struct LeadFractionRule;

impl ValidationRule for LeadFractionRule {
    fn name(&self) -> &str {
        "lead_fraction"
    }

    fn validate(&self, profile: &SummaryProfile) -> Vec<ValidationDiagnostic> {
        match profile.summarizer.lead_fraction {
            Some(f) if !(0.0..=1.0).contains(&f) => vec![ValidationDiagnostic::error(
                ProfileError::new(
                    ErrorCode::OutOfRange,
                    "/summarizer/lead_fraction",
                    format!("lead_fraction must be between 0 and 1, got {f}"),
                )
                .with_hint("Use 0 to disable the position bonus"),
            )],
            _ => vec![],
        }
    }
}

// ─── 4. lead_bonus finite and non-negative ──────────────────────────────────

struct LeadBonusRule;

impl ValidationRule for LeadBonusRule {
    fn name(&self) -> &str {
        "lead_bonus"
    }

    fn validate(&self, profile: &SummaryProfile) -> Vec<ValidationDiagnostic> {
        match profile.summarizer.lead_bonus {
            Some(b) if !b.is_finite() || b < 0.0 => vec![ValidationDiagnostic::error(
                ProfileError::new(
                    ErrorCode::OutOfRange,
                    "/summarizer/lead_bonus",
                    format!("lead_bonus must be a non-negative number, got {b}"),
                )
                .with_hint("Use 1.0 to disable the position bonus"),
            )],
            _ => vec![],
        }
    }
}

// ─── 5. Runtime limits must be positive when set ────────────────────────────

struct RuntimeLimitsRule;

impl ValidationRule for RuntimeLimitsRule {
    fn name(&self) -> &str {
        "runtime_limits"
    }

    fn validate(&self, profile: &SummaryProfile) -> Vec<ValidationDiagnostic> {
        if profile.runtime.max_chars == Some(0) {
            vec![ValidationDiagnostic::error(
                ProfileError::new(
                    ErrorCode::LimitExceeded,
                    "/runtime/max_chars",
                    "max_chars must be greater than 0",
                )
                .with_hint("Remove max_chars to disable the limit, or set it to a positive value"),
            )]
        } else {
            vec![]
        }
    }
}

// ─── 6. Stopword language must be known ─────────────────────────────────────

struct StopwordLanguageRule;

impl ValidationRule for StopwordLanguageRule {
    fn name(&self) -> &str {
        "stopwords"
    }

    fn validate(&self, profile: &SummaryProfile) -> Vec<ValidationDiagnostic> {
        match profile.summarizer.stopwords.as_deref() {
            Some(lang) if !is_supported_language(lang) => vec![ValidationDiagnostic::error(
                ProfileError::new(
                    ErrorCode::UnknownLanguage,
                    "/summarizer/stopwords",
                    format!("no stopword list for \"{lang}\""),
                )
                .with_hint(format!("Supported: {}", SUPPORTED_LANGUAGES.join(", "))),
            )],
            _ => vec![],
        }
    }
}

// ─── 7. Unknown fields (strict → error, non-strict → warning) ──────────────

struct UnknownFieldsRule;

impl UnknownFieldsRule {
    /// Collect unknown-field diagnostics at the given JSON pointer `path`
    /// from the extra fields captured by `#[serde(flatten)]`.
    fn check_unknowns(
        path: &str,
        unknowns: &HashMap<String, serde_json::Value>,
        strict: bool,
    ) -> Vec<ValidationDiagnostic> {
        let diag_fn = if strict {
            ValidationDiagnostic::error
        } else {
            ValidationDiagnostic::warning
        };
        let mut keys: Vec<_> = unknowns.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                diag_fn(
                    ProfileError::new(
                        ErrorCode::UnknownField,
                        format!("{path}/{key}"),
                        format!("unrecognized field \"{key}\""),
                    )
                    .with_hint("Check spelling or remove this field"),
                )
            })
            .collect()
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, profile: &SummaryProfile) -> Vec<ValidationDiagnostic> {
        let mut out = Vec::new();
        out.extend(Self::check_unknowns("", &profile.unknown_fields, profile.strict));
        out.extend(Self::check_unknowns(
            "/summarizer",
            &profile.summarizer.unknown_fields,
            profile.strict,
        ));
        out.extend(Self::check_unknowns(
            "/runtime",
            &profile.runtime.unknown_fields,
            profile.strict,
        ));
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
