//! Comparison row: editable inputs plus cascade outputs.

use serde::{Deserialize, Serialize};

use super::types::{CertaintyLevel, Domain, EvidenceType, Judgment};

/// One pairwise comparison of the GRADE table.
///
/// Judgments are kept as the raw text the reviewer entered and parsed on
/// read, so a half-filled or mistyped cell never breaks the cascade. Fields
/// from `direct_rating` on are owned by the cascade and overwritten on every
/// recompute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonRow {
    pub arm1: String,
    pub arm2: String,
    pub arm3: Option<String>,
    pub sample_size: f64,
    pub direct_estimate: Option<f64>,
    pub indirect_estimate: Option<f64>,
    pub network_estimate: Option<f64>,

    #[serde(rename = "ROB")]
    pub rob: Option<String>,
    #[serde(rename = "ROB_reason")]
    pub rob_reason: Option<String>,
    #[serde(rename = "Inconsistency")]
    pub inconsistency: Option<String>,
    #[serde(rename = "Inconsistency_reason")]
    pub inconsistency_reason: Option<String>,
    #[serde(rename = "Indirectness")]
    pub indirectness: Option<String>,
    #[serde(rename = "Indirectness_reason")]
    pub indirectness_reason: Option<String>,
    #[serde(rename = "Publication_bias")]
    pub publication_bias: Option<String>,
    #[serde(rename = "Publication_bias_reason")]
    pub publication_bias_reason: Option<String>,
    #[serde(rename = "Intransitivity")]
    pub intransitivity: Option<String>,
    #[serde(rename = "Intransitivity_reason")]
    pub intransitivity_reason: Option<String>,
    #[serde(rename = "Incoherence")]
    pub incoherence: Option<String>,
    #[serde(rename = "Incoherence_reason")]
    pub incoherence_reason: Option<String>,
    #[serde(rename = "Imprecision")]
    pub imprecision: Option<String>,
    #[serde(rename = "Imprecision_reason")]
    pub imprecision_reason: Option<String>,

    #[serde(rename = "Direct_rating_without_imprecision")]
    pub direct_rating: Option<CertaintyLevel>,
    #[serde(rename = "Certainty_of_evidence_for_arm1")]
    pub certainty_arm1: Option<CertaintyLevel>,
    #[serde(rename = "Certainty_of_evidence_for_arm2")]
    pub certainty_arm2: Option<CertaintyLevel>,
    #[serde(rename = "Indirect_rating_without_imprecision")]
    pub indirect_rating: Option<CertaintyLevel>,
    #[serde(rename = "Higher_rating_of_direct_and_indirect_without_imprecision")]
    pub combined_rating: Option<CertaintyLevel>,
    #[serde(rename = "Evidence_type_for_final_rating")]
    pub evidence_type: Option<EvidenceType>,
    #[serde(rename = "Final_rating")]
    pub final_rating: Option<CertaintyLevel>,
    #[serde(rename = "Final_rating_reason")]
    pub final_rating_reason: Option<String>,
}

impl ComparisonRow {
    pub fn new(arm1: impl Into<String>, arm2: impl Into<String>, sample_size: f64) -> Self {
        Self {
            arm1: arm1.into(),
            arm2: arm2.into(),
            sample_size,
            ..Default::default()
        }
    }

    pub fn with_direct(mut self, estimate: f64) -> Self {
        self.direct_estimate = Some(estimate);
        self
    }

    pub fn with_indirect(mut self, estimate: f64) -> Self {
        self.indirect_estimate = Some(estimate);
        self
    }

    pub fn with_judgment(mut self, domain: Domain, text: &str) -> Self {
        *self.judgment_slot(domain) = Some(text.to_string());
        self
    }

    pub fn has_direct(&self) -> bool {
        self.direct_estimate.is_some_and(|v| !v.is_nan())
    }

    pub fn has_indirect(&self) -> bool {
        self.indirect_estimate.is_some_and(|v| !v.is_nan())
    }

    /// Raw judgment text for a domain.
    pub fn judgment_text(&self, domain: Domain) -> Option<&str> {
        match domain {
            Domain::RiskOfBias => self.rob.as_deref(),
            Domain::Inconsistency => self.inconsistency.as_deref(),
            Domain::Indirectness => self.indirectness.as_deref(),
            Domain::PublicationBias => self.publication_bias.as_deref(),
            Domain::Intransitivity => self.intransitivity.as_deref(),
            Domain::Incoherence => self.incoherence.as_deref(),
            Domain::Imprecision => self.imprecision.as_deref(),
        }
    }

    /// Parsed judgment; unrecognized text is treated as absent.
    pub fn judgment(&self, domain: Domain) -> Option<Judgment> {
        self.judgment_text(domain).and_then(Judgment::parse)
    }

    /// Levels removed by the judgment for `domain`.
    pub fn downgrade(&self, domain: Domain) -> u8 {
        domain.downgrade(self.judgment(domain))
    }

    pub(crate) fn judgment_slot(&mut self, domain: Domain) -> &mut Option<String> {
        match domain {
            Domain::RiskOfBias => &mut self.rob,
            Domain::Inconsistency => &mut self.inconsistency,
            Domain::Indirectness => &mut self.indirectness,
            Domain::PublicationBias => &mut self.publication_bias,
            Domain::Intransitivity => &mut self.intransitivity,
            Domain::Incoherence => &mut self.incoherence,
            Domain::Imprecision => &mut self.imprecision,
        }
    }

    pub(crate) fn reason_slot(&mut self, domain: Domain) -> &mut Option<String> {
        match domain {
            Domain::RiskOfBias => &mut self.rob_reason,
            Domain::Inconsistency => &mut self.inconsistency_reason,
            Domain::Indirectness => &mut self.indirectness_reason,
            Domain::PublicationBias => &mut self.publication_bias_reason,
            Domain::Intransitivity => &mut self.intransitivity_reason,
            Domain::Incoherence => &mut self.incoherence_reason,
            Domain::Imprecision => &mut self.imprecision_reason,
        }
    }

    /// Whether the row compares `a` with `b`, in either order.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        let (x, y) = (self.arm1.trim(), self.arm2.trim());
        (x == a && y == b) || (x == b && y == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_table_column_names() {
        let row = ComparisonRow::new("A", "B", 100.0)
            .with_direct(0.5)
            .with_judgment(Domain::PublicationBias, "Undetected");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["Publication_bias"], "Undetected");
        assert!(json.get("Direct_rating_without_imprecision").is_some());
        assert!(json.get("Certainty_of_evidence_for_arm1").is_some());
        assert!(json.get("Final_rating_reason").is_some());
    }

    #[test]
    fn test_deserializes_partial_row() {
        let row: ComparisonRow =
            serde_json::from_str(r#"{"arm1":"A","arm2":"B","ROB":"Serious"}"#).unwrap();
        assert_eq!(row.sample_size, 0.0);
        assert_eq!(row.judgment(Domain::RiskOfBias), Some(Judgment::Serious));
        assert!(!row.has_direct());
    }

    #[test]
    fn test_malformed_judgment_is_absent() {
        let row = ComparisonRow::new("A", "B", 1.0).with_judgment(Domain::RiskOfBias, "??");
        assert_eq!(row.judgment(Domain::RiskOfBias), None);
        assert_eq!(row.downgrade(Domain::RiskOfBias), 0);
    }

    #[test]
    fn test_connects_either_order() {
        let row = ComparisonRow::new("A", " B ", 1.0);
        assert!(row.connects("B", "A"));
        assert!(!row.connects("A", "C"));
    }
}
