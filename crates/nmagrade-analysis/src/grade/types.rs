//! Certainty levels, judgments and evidence types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// GRADE certainty level. Ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CertaintyLevel {
    #[serde(rename = "Very low")]
    VeryLow = 1,
    #[serde(rename = "Low")]
    Low = 2,
    #[serde(rename = "Moderate")]
    Moderate = 3,
    #[serde(rename = "High")]
    High = 4,
}

impl CertaintyLevel {
    pub const ALL: [CertaintyLevel; 4] = [Self::VeryLow, Self::Low, Self::Moderate, Self::High];

    pub fn level(self) -> u8 {
        self as u8
    }

    /// Level from an integer, clamped to [1, 4].
    pub fn from_level(level: i32) -> Self {
        match level {
            i32::MIN..=1 => Self::VeryLow,
            2 => Self::Low,
            3 => Self::Moderate,
            _ => Self::High,
        }
    }

    /// Lower by `steps`, never below Very low.
    pub fn downgrade(self, steps: u8) -> Self {
        Self::from_level(i32::from(self.level()) - i32::from(steps))
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Case-insensitive label match.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for CertaintyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A reviewer's judgment on one GRADE domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Judgment {
    NotSerious,
    Serious,
    VerySerious,
    /// Imprecision only.
    ExtremelySerious,
    /// Publication bias only.
    Undetected,
}

impl Judgment {
    /// Lenient parse; anything outside the vocabulary is `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "not serious" => Some(Self::NotSerious),
            "serious" => Some(Self::Serious),
            "very serious" => Some(Self::VerySerious),
            "extremely serious" => Some(Self::ExtremelySerious),
            "undetected" => Some(Self::Undetected),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NotSerious => "Not serious",
            Self::Serious => "Serious",
            Self::VerySerious => "Very serious",
            Self::ExtremelySerious => "Extremely serious",
            Self::Undetected => "Undetected",
        }
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The judged GRADE domains of a comparison row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "ROB")]
    RiskOfBias,
    Inconsistency,
    Indirectness,
    #[serde(rename = "Publication_bias")]
    PublicationBias,
    Intransitivity,
    Incoherence,
    Imprecision,
}

impl Domain {
    pub const ALL: [Domain; 7] = [
        Self::RiskOfBias,
        Self::Inconsistency,
        Self::Indirectness,
        Self::PublicationBias,
        Self::Intransitivity,
        Self::Incoherence,
        Self::Imprecision,
    ];

    /// Domains downgrading the direct rating.
    pub const DIRECT: [Domain; 4] = [
        Self::RiskOfBias,
        Self::Inconsistency,
        Self::Indirectness,
        Self::PublicationBias,
    ];

    /// Column name in the comparison table.
    pub fn column(self) -> &'static str {
        match self {
            Self::RiskOfBias => "ROB",
            Self::Inconsistency => "Inconsistency",
            Self::Indirectness => "Indirectness",
            Self::PublicationBias => "Publication_bias",
            Self::Intransitivity => "Intransitivity",
            Self::Incoherence => "Incoherence",
            Self::Imprecision => "Imprecision",
        }
    }

    /// Levels removed for `judgment` in this domain. Judgments outside the
    /// domain's vocabulary count as absent.
    pub fn downgrade(self, judgment: Option<Judgment>) -> u8 {
        match (self, judgment) {
            (_, Some(Judgment::Serious)) => 1,
            (_, Some(Judgment::VerySerious)) => 2,
            (Self::Imprecision, Some(Judgment::ExtremelySerious)) => 3,
            _ => 0,
        }
    }
}

/// Which rating the final certainty is based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceType {
    Network,
    Direct,
    Indirect,
    Unknown,
}

impl EvidenceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Direct => "direct",
            Self::Indirect => "indirect",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EvidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_clamps() {
        assert_eq!(CertaintyLevel::from_level(-3), CertaintyLevel::VeryLow);
        assert_eq!(CertaintyLevel::from_level(7), CertaintyLevel::High);
        assert_eq!(CertaintyLevel::High.downgrade(3), CertaintyLevel::VeryLow);
        assert_eq!(CertaintyLevel::Low.downgrade(5), CertaintyLevel::VeryLow);
    }

    #[test]
    fn test_judgment_parse_is_lenient() {
        assert_eq!(Judgment::parse(" very   SERIOUS "), Some(Judgment::VerySerious));
        assert_eq!(Judgment::parse("not_serious"), Some(Judgment::NotSerious));
        assert_eq!(Judgment::parse("somewhat"), None);
        assert_eq!(Judgment::parse(""), None);
    }

    #[test]
    fn test_extremely_serious_only_counts_for_imprecision() {
        let extreme = Some(Judgment::ExtremelySerious);
        assert_eq!(Domain::Imprecision.downgrade(extreme), 3);
        assert_eq!(Domain::RiskOfBias.downgrade(extreme), 0);
        assert_eq!(Domain::PublicationBias.downgrade(Some(Judgment::Undetected)), 0);
    }

    #[test]
    fn test_certainty_serializes_as_label() {
        let json = serde_json::to_string(&CertaintyLevel::VeryLow).unwrap();
        assert_eq!(json, "\"Very low\"");
        assert_eq!(CertaintyLevel::parse("moderate"), Some(CertaintyLevel::Moderate));
    }
}
