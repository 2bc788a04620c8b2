//! Editable GRADE table that keeps computed fields consistent.

use nmagrade_core::config::GradeConfig;
use nmagrade_core::errors::GradeError;

use super::bridges::BridgeRanking;
use super::cascade::recompute_all_with_config;
use super::row::ComparisonRow;
use super::summary::GradeSummary;
use super::types::Domain;

/// An edit to one user-owned field. Computed fields have no variant.
#[derive(Debug, Clone, PartialEq)]
pub enum EditableField {
    Arm1(String),
    Arm2(String),
    Arm3(Option<String>),
    SampleSize(f64),
    DirectEstimate(Option<f64>),
    IndirectEstimate(Option<f64>),
    NetworkEstimate(Option<f64>),
    Judgment(Domain, Option<String>),
    Reason(Domain, Option<String>),
}

impl EditableField {
    fn apply(self, row: &mut ComparisonRow) {
        match self {
            Self::Arm1(v) => row.arm1 = v,
            Self::Arm2(v) => row.arm2 = v,
            Self::Arm3(v) => row.arm3 = v,
            Self::SampleSize(v) => row.sample_size = v,
            Self::DirectEstimate(v) => row.direct_estimate = v,
            Self::IndirectEstimate(v) => row.indirect_estimate = v,
            Self::NetworkEstimate(v) => row.network_estimate = v,
            Self::Judgment(domain, v) => *row.judgment_slot(domain) = v,
            Self::Reason(domain, v) => *row.reason_slot(domain) = v,
        }
    }
}

/// Row set whose computed fields are recomputed in full after every edit,
/// so readers never observe a partially updated table.
#[derive(Debug, Clone)]
pub struct GradeTable {
    rows: Vec<ComparisonRow>,
    config: GradeConfig,
}

impl GradeTable {
    pub fn new(rows: Vec<ComparisonRow>) -> Self {
        Self::with_config(rows, GradeConfig::default())
    }

    pub fn with_config(rows: Vec<ComparisonRow>, config: GradeConfig) -> Self {
        let rows = recompute_all_with_config(rows, &config);
        Self { rows, config }
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<ComparisonRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Apply one edit and recompute every row.
    pub fn edit(&mut self, index: usize, field: EditableField) -> Result<(), GradeError> {
        self.edit_batch(vec![(index, field)])
    }

    /// Apply several edits and recompute once. Indices are checked up front;
    /// on error nothing is applied.
    pub fn edit_batch(&mut self, edits: Vec<(usize, EditableField)>) -> Result<(), GradeError> {
        let len = self.rows.len();
        if let Some(&(index, _)) = edits.iter().find(|(index, _)| *index >= len) {
            return Err(GradeError::RowOutOfRange { index, len });
        }

        for (index, field) in edits {
            field.apply(&mut self.rows[index]);
        }
        let rows = std::mem::take(&mut self.rows);
        self.rows = recompute_all_with_config(rows, &self.config);
        Ok(())
    }

    /// Append a row and recompute.
    pub fn push(&mut self, row: ComparisonRow) {
        self.rows.push(row);
        let rows = std::mem::take(&mut self.rows);
        self.rows = recompute_all_with_config(rows, &self.config);
    }

    /// Remove a row and recompute.
    pub fn remove(&mut self, index: usize) -> Result<ComparisonRow, GradeError> {
        if index >= self.rows.len() {
            return Err(GradeError::RowOutOfRange { index, len: self.rows.len() });
        }
        let removed = self.rows.remove(index);
        let rows = std::mem::take(&mut self.rows);
        self.rows = recompute_all_with_config(rows, &self.config);
        Ok(removed)
    }

    pub fn bridge_ranking(&self) -> BridgeRanking {
        BridgeRanking::compute(&self.rows, self.config.effective_bridge_count())
    }

    pub fn summary(&self) -> GradeSummary {
        GradeSummary::from_rows(&self.rows)
    }
}
