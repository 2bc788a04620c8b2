//! Per-arm study records, the raw input of the validation/network pipeline.

use serde::{Deserialize, Serialize};

/// Risk-of-bias judgment attached to a study arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskOfBias {
    Low,
    SomeConcerns,
    High,
}

impl RiskOfBias {
    /// Lenient parse from free text; unknown text yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "low" => Some(Self::Low),
            "some concerns" | "unclear" | "moderate" => Some(Self::SomeConcerns),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// One treatment arm of one study.
///
/// Numeric fields are optional so a record set can mirror a table in which a
/// column is absent or a cell is blank.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StudyArmRecord {
    pub study: String,
    pub treatment: String,
    #[serde(default)]
    pub n: Option<i64>,
    #[serde(default)]
    pub event: Option<i64>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub sd: Option<f64>,
    #[serde(default)]
    pub risk_of_bias: Option<RiskOfBias>,
}

impl StudyArmRecord {
    /// A binary-outcome arm: `event` events among `n` participants.
    pub fn binary(study: impl Into<String>, treatment: impl Into<String>, event: i64, n: i64) -> Self {
        Self {
            study: study.into(),
            treatment: treatment.into(),
            n: Some(n),
            event: Some(event),
            ..Default::default()
        }
    }

    /// A continuous-outcome arm summarized by mean and standard deviation.
    pub fn continuous(
        study: impl Into<String>,
        treatment: impl Into<String>,
        n: i64,
        mean: f64,
        sd: f64,
    ) -> Self {
        Self {
            study: study.into(),
            treatment: treatment.into(),
            n: Some(n),
            mean: Some(mean),
            sd: Some(sd),
            ..Default::default()
        }
    }

    pub fn with_risk_of_bias(mut self, rob: RiskOfBias) -> Self {
        self.risk_of_bias = Some(rob);
        self
    }

    /// Study label with surrounding whitespace removed.
    pub fn study_key(&self) -> &str {
        self.study.trim()
    }

    /// Treatment label with surrounding whitespace removed.
    pub fn treatment_key(&self) -> &str {
        self.treatment.trim()
    }

    /// Whether this record carries a value for the named column.
    pub fn has_column(&self, column: &str) -> bool {
        match column {
            "study" => !self.study_key().is_empty(),
            "treatment" => !self.treatment_key().is_empty(),
            "n" => self.n.is_some(),
            "event" => self.event.is_some(),
            "mean" => self.mean.is_some(),
            "sd" => self.sd.is_some(),
            "risk_of_bias" => self.risk_of_bias.is_some(),
            _ => false,
        }
    }
}

/// A column is present in a record set when at least one record carries it.
pub fn column_present(records: &[StudyArmRecord], column: &str) -> bool {
    records.iter().any(|r| r.has_column(column))
}
