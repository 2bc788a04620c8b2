//! Validator → analyzer → recommendation engine, in dependency order.

use nmagrade_core::config::NmaConfig;
use nmagrade_core::errors::PipelineError;
use nmagrade_core::types::OutcomeType;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::grade::{ComparisonRow, GradeTable};
use crate::network::{characterize, Characteristics};
use crate::recommendation::{recommend_with_config, Recommendations};
use crate::records::StudyArmRecord;
use crate::validation::{DataValidator, ValidationResult};

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub label: String,
    pub outcome_type: OutcomeType,
    pub validation: ValidationResult,
    pub characteristics: Characteristics,
    pub recommendations: Recommendations,
}

/// Runs the analysis components with one resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalysisPipeline {
    config: NmaConfig,
}

impl AnalysisPipeline {
    pub fn new(config: NmaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NmaConfig {
        &self.config
    }

    /// Validate, characterize and recommend.
    ///
    /// With `pipeline.block_on_invalid` (the default) a record set with
    /// validation errors stops the run with [`PipelineError::InvalidData`];
    /// otherwise analysis continues on the degraded input.
    pub fn run(
        &self,
        records: &[StudyArmRecord],
        label: &str,
        outcome_type: OutcomeType,
    ) -> Result<AnalysisReport, PipelineError> {
        let validation =
            DataValidator::new(self.config.validation.clone()).validate(records, label, outcome_type);

        if !validation.is_valid {
            if self.config.pipeline.effective_block_on_invalid() {
                warn!(
                    label,
                    errors = validation.summary.errors,
                    "analysis blocked by invalid data"
                );
                return Err(PipelineError::InvalidData {
                    label: label.to_string(),
                    errors: validation.summary.errors,
                });
            }
            warn!(
                label,
                errors = validation.summary.errors,
                "continuing analysis on invalid data"
            );
        }

        let characteristics = characterize(records, outcome_type);
        let recommendations =
            recommend_with_config(&characteristics, outcome_type, &self.config.recommendation)?;

        info!(
            label,
            outcome = %outcome_type,
            studies = characteristics.basic_stats.n_studies,
            treatments = characteristics.basic_stats.n_treatments,
            complexity = characteristics.complexity_score,
            confidence = recommendations.overall_confidence,
            "analysis complete"
        );

        Ok(AnalysisReport {
            label: label.to_string(),
            outcome_type,
            validation,
            characteristics,
            recommendations,
        })
    }

    /// Like [`run`](Self::run) with the outcome type given as text, as it
    /// arrives from a host. Unknown outcome types are rejected before any
    /// component runs.
    pub fn run_str(
        &self,
        records: &[StudyArmRecord],
        label: &str,
        outcome_type: &str,
    ) -> Result<AnalysisReport, PipelineError> {
        let outcome_type: OutcomeType = outcome_type.parse()?;
        self.run(records, label, outcome_type)
    }

    /// Build a GRADE table over comparison rows with the configured cascade
    /// settings.
    pub fn grade(&self, rows: Vec<ComparisonRow>) -> GradeTable {
        GradeTable::with_config(rows, self.config.grade.clone())
    }
}
