//! Summary profiles: versioned JSON configuration plus validation.

pub mod errors;
pub mod schema;
pub mod validation;

pub use errors::{ErrorCode, ProfileError};
pub use schema::{RuntimeSpec, SummarizerSection, SummaryProfile, PROFILE_VERSION};
pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};

use crate::errors::{Result, SummarizeError};
use crate::types::SummarizerConfig;

impl SummaryProfile {
    /// Validate with the default rules and build the summarizer config.
    ///
    /// Errors fail the whole profile; warnings are returned alongside the
    /// config for the caller to surface.
    pub fn resolve(&self) -> Result<(SummarizerConfig, Vec<ProfileError>)> {
        let report = ValidationEngine::with_defaults().validate(self);
        if report.has_errors() {
            return Err(SummarizeError::InvalidProfile(
                report.errors().cloned().collect(),
            ));
        }
        let warnings = report.warnings().cloned().collect();
        Ok((self.to_config(), warnings))
    }
}
