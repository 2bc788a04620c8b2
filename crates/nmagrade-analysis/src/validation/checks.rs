//! Individual record checks. Each returns its issues in row order.

use nmagrade_core::types::{BTreeMap, FxHashMap, OutcomeType};

use super::types::{Issue, IssueType, Severity};
use crate::records::{column_present, StudyArmRecord};

fn row_issue(
    issue_type: IssueType,
    severity: Severity,
    row: usize,
    record: &StudyArmRecord,
    description: String,
) -> Issue {
    Issue {
        issue_type,
        row_number: Some(row),
        study: Some(record.study_key().to_string()),
        treatment: Some(record.treatment_key().to_string()),
        description,
        severity,
    }
}

/// Required columns absent from every record, in the outcome type's order.
pub fn missing_columns(records: &[StudyArmRecord], outcome_type: OutcomeType) -> Vec<&'static str> {
    outcome_type
        .required_columns()
        .iter()
        .copied()
        .filter(|col| !column_present(records, col))
        .collect()
}

/// Rows lacking a value for a required column that other rows carry.
pub fn missing_values(records: &[StudyArmRecord], outcome_type: OutcomeType) -> Vec<Issue> {
    let required = outcome_type.required_columns();
    records
        .iter()
        .enumerate()
        .filter_map(|(row, r)| {
            let blank: Vec<&str> = required
                .iter()
                .copied()
                .filter(|col| !r.has_column(col))
                .collect();
            (!blank.is_empty()).then(|| {
                row_issue(
                    IssueType::MissingValue,
                    Severity::Error,
                    row,
                    r,
                    format!("Row {row}: no value for required column(s): {}", blank.join(", ")),
                )
            })
        })
        .collect()
}

/// `event > n` on any row carrying both values.
pub fn event_exceeds_n(records: &[StudyArmRecord]) -> Vec<Issue> {
    records
        .iter()
        .enumerate()
        .filter_map(|(row, r)| match (r.event, r.n) {
            (Some(event), Some(n)) if event > n => Some(row_issue(
                IssueType::EventExceedsN,
                Severity::Error,
                row,
                r,
                format!(
                    "Row {row}: event count ({event}) exceeds sample size ({n}) for {} in {}",
                    r.treatment_key(),
                    r.study_key()
                ),
            )),
            _ => None,
        })
        .collect()
}

/// `sd == 0` rows. Only meaningful for continuous outcomes.
pub fn zero_sd(records: &[StudyArmRecord]) -> Vec<Issue> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.sd == Some(0.0))
        .map(|(row, r)| {
            row_issue(
                IssueType::ZeroSd,
                Severity::Warning,
                row,
                r,
                format!(
                    "Row {row}: standard deviation is zero for {} in {}",
                    r.treatment_key(),
                    r.study_key()
                ),
            )
        })
        .collect()
}

/// Every row whose `(study, treatment)` pair occurs more than once.
pub fn duplicate_treatments(records: &[StudyArmRecord]) -> Vec<Issue> {
    let mut counts: FxHashMap<(&str, &str), usize> = FxHashMap::default();
    for r in records {
        *counts.entry((r.study_key(), r.treatment_key())).or_insert(0) += 1;
    }

    records
        .iter()
        .enumerate()
        .filter_map(|(row, r)| {
            let count = counts
                .get(&(r.study_key(), r.treatment_key()))
                .copied()
                .unwrap_or(0);
            (count > 1).then(|| {
                row_issue(
                    IssueType::DuplicateTreatment,
                    Severity::Error,
                    row,
                    r,
                    format!(
                        "Row {row}: treatment {} appears {count} times in study {}",
                        r.treatment_key(),
                        r.study_key()
                    ),
                )
            })
        })
        .collect()
}

/// Arms whose sample size is zero or negative.
pub fn non_positive_sample_size(records: &[StudyArmRecord]) -> Vec<Issue> {
    records
        .iter()
        .enumerate()
        .filter_map(|(row, r)| match r.n {
            Some(n) if n <= 0 => Some(row_issue(
                IssueType::NonPositiveSampleSize,
                Severity::Error,
                row,
                r,
                format!("Row {row}: sample size must be positive, got {n}"),
            )),
            _ => None,
        })
        .collect()
}

/// Negative event counts or standard deviations.
pub fn negative_values(records: &[StudyArmRecord]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (row, r) in records.iter().enumerate() {
        if let Some(event) = r.event.filter(|e| *e < 0) {
            issues.push(row_issue(
                IssueType::NegativeValue,
                Severity::Error,
                row,
                r,
                format!("Row {row}: event count is negative ({event})"),
            ));
        }
        if let Some(sd) = r.sd.filter(|sd| *sd < 0.0) {
            issues.push(row_issue(
                IssueType::NegativeValue,
                Severity::Error,
                row,
                r,
                format!("Row {row}: standard deviation is negative ({sd})"),
            ));
        }
    }
    issues
}

/// Studies contributing fewer than two distinct treatments, in study order.
pub fn single_arm_studies(records: &[StudyArmRecord]) -> Vec<Issue> {
    let mut arms: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for r in records {
        let treatments = arms.entry(r.study_key()).or_default();
        if !treatments.contains(&r.treatment_key()) {
            treatments.push(r.treatment_key());
        }
    }

    arms.into_iter()
        .filter(|(_, treatments)| treatments.len() < 2)
        .map(|(study, _)| Issue {
            issue_type: IssueType::SingleArmStudy,
            row_number: None,
            study: Some(study.to_string()),
            treatment: None,
            description: format!("Study {study} has a single arm and contributes no comparison"),
            severity: Severity::Warning,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_order() {
        let records = vec![StudyArmRecord {
            study: "S1".into(),
            treatment: "A".into(),
            n: Some(10),
            ..Default::default()
        }];
        assert_eq!(missing_columns(&records, OutcomeType::Continuous), vec!["mean", "sd"]);
        assert_eq!(missing_columns(&records, OutcomeType::Binary), vec!["event"]);
    }

    #[test]
    fn test_missing_values_name_blank_cells() {
        let records = vec![
            StudyArmRecord::binary("S1", "A", 3, 20),
            StudyArmRecord {
                study: "S1".into(),
                treatment: "B".into(),
                event: Some(5),
                ..Default::default()
            },
            StudyArmRecord::binary("S1", " ", 1, 10),
        ];
        let issues = missing_values(&records, OutcomeType::Binary);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].row_number, Some(1));
        assert!(issues[0].description.ends_with("n"));
        assert_eq!(issues[1].row_number, Some(2));
        assert!(issues[1].description.contains("treatment"));
    }

    #[test]
    fn test_duplicates_flag_every_row() {
        let records = vec![
            StudyArmRecord::binary("S1", "A", 1, 10),
            StudyArmRecord::binary("S1", "B", 1, 10),
            StudyArmRecord::binary("S1", " A", 2, 10),
        ];
        let issues = duplicate_treatments(&records);
        let rows: Vec<_> = issues.iter().map(|i| i.row_number).collect();
        assert_eq!(rows, vec![Some(0), Some(2)]);
    }

    #[test]
    fn test_single_arm_study_is_study_level() {
        let records = vec![
            StudyArmRecord::binary("S1", "A", 1, 10),
            StudyArmRecord::binary("S2", "A", 1, 10),
            StudyArmRecord::binary("S2", "B", 1, 10),
        ];
        let issues = single_arm_studies(&records);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].study.as_deref(), Some("S1"));
        assert_eq!(issues[0].row_number, None);
    }
}
