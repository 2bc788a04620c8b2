//! Validator entry point: runs the checks in a fixed order.

use nmagrade_core::config::ValidationConfig;
use nmagrade_core::types::OutcomeType;
use tracing::debug;

use super::checks;
use super::types::{Issue, IssueType, Severity, ValidationResult};
use crate::records::StudyArmRecord;

/// Data quality validator. Pure; holds only configuration.
#[derive(Debug, Clone, Default)]
pub struct DataValidator {
    config: ValidationConfig,
}

impl DataValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a labeled record set for the declared outcome type.
    pub fn validate(
        &self,
        records: &[StudyArmRecord],
        label: &str,
        outcome_type: OutcomeType,
    ) -> ValidationResult {
        if records.is_empty() {
            return ValidationResult::from_issues(
                label,
                outcome_type,
                vec![Issue::dataset(
                    IssueType::EmptyData,
                    Severity::Error,
                    format!("Data set '{label}' contains no records"),
                )],
            );
        }

        let missing = checks::missing_columns(records, outcome_type);
        if !missing.is_empty() {
            return ValidationResult::from_issues(
                label,
                outcome_type,
                vec![Issue::dataset(
                    IssueType::MissingColumns,
                    Severity::Error,
                    format!(
                        "Data set '{label}' is missing required {outcome_type} column(s): {}",
                        missing.join(", ")
                    ),
                )],
            );
        }

        let mut issues = checks::missing_values(records, outcome_type);
        issues.extend(checks::event_exceeds_n(records));
        if outcome_type == OutcomeType::Continuous {
            issues.extend(checks::zero_sd(records));
        }
        issues.extend(checks::duplicate_treatments(records));
        issues.extend(checks::non_positive_sample_size(records));
        issues.extend(checks::negative_values(records));
        if self.config.effective_warn_single_arm_studies() {
            issues.extend(checks::single_arm_studies(records));
        }

        let result = ValidationResult::from_issues(label, outcome_type, issues);
        debug!(
            label,
            records = records.len(),
            errors = result.summary.errors,
            warnings = result.summary.warnings,
            "validated record set"
        );
        result
    }
}

/// Validate with the default configuration.
pub fn validate(records: &[StudyArmRecord], label: &str, outcome_type: OutcomeType) -> ValidationResult {
    DataValidator::default().validate(records, label, outcome_type)
}
