//! Core types for data quality validation.

use std::fmt;

use nmagrade_core::types::OutcomeType;
use serde::{Deserialize, Serialize};

/// The closed set of issue kinds the validator reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    EmptyData,
    MissingColumns,
    MissingValue,
    EventExceedsN,
    ZeroSd,
    DuplicateTreatment,
    NonPositiveSampleSize,
    NegativeValue,
    SingleArmStudy,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyData => "empty_data",
            Self::MissingColumns => "missing_columns",
            Self::MissingValue => "missing_value",
            Self::EventExceedsN => "event_exceeds_n",
            Self::ZeroSd => "zero_sd",
            Self::DuplicateTreatment => "duplicate_treatment",
            Self::NonPositiveSampleSize => "non_positive_sample_size",
            Self::NegativeValue => "negative_value",
            Self::SingleArmStudy => "single_arm_study",
        }
    }

    /// Structural issues abort validation; no other issue accompanies them.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::EmptyData | Self::MissingColumns)
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue severity. Only errors make a data set invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub issue_type: IssueType,
    /// Zero-based position of the offending record; `None` for
    /// data-set-level and study-level issues.
    pub row_number: Option<usize>,
    pub study: Option<String>,
    pub treatment: Option<String>,
    pub description: String,
    pub severity: Severity,
}

impl Issue {
    /// A data-set-level issue with no row or study attached.
    pub fn dataset(issue_type: IssueType, severity: Severity, description: String) -> Self {
        Self {
            issue_type,
            row_number: None,
            study: None,
            treatment: None,
            description,
            severity,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Issue counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Outcome of validating one labeled record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub label: String,
    pub outcome_type: OutcomeType,
    pub is_valid: bool,
    pub issues: Vec<Issue>,
    pub summary: ValidationSummary,
}

impl ValidationResult {
    /// Build a result from collected issues; validity and counts derive from them.
    pub fn from_issues(label: &str, outcome_type: OutcomeType, issues: Vec<Issue>) -> Self {
        let errors = issues.iter().filter(|i| i.is_error()).count();
        let summary = ValidationSummary {
            total: issues.len(),
            errors,
            warnings: issues.len() - errors,
        };
        Self {
            label: label.to_string(),
            outcome_type,
            is_valid: errors == 0,
            issues,
            summary,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// Issues of one kind, in report order.
    pub fn issues_of(&self, issue_type: IssueType) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.issue_type == issue_type).collect()
    }
}
