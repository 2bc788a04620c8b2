//! Aggregate counts over a recomputed GRADE table.

use serde::{Deserialize, Serialize};

use super::row::ComparisonRow;
use super::types::{CertaintyLevel, EvidenceType};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub total: usize,
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
    pub very_low: usize,
    pub unrated: usize,
    pub network: usize,
    pub direct: usize,
    pub indirect: usize,
    pub unknown: usize,
}

impl GradeSummary {
    pub fn from_rows(rows: &[ComparisonRow]) -> Self {
        let mut s = Self { total: rows.len(), ..Default::default() };
        for row in rows {
            match row.final_rating {
                Some(CertaintyLevel::High) => s.high += 1,
                Some(CertaintyLevel::Moderate) => s.moderate += 1,
                Some(CertaintyLevel::Low) => s.low += 1,
                Some(CertaintyLevel::VeryLow) => s.very_low += 1,
                None => s.unrated += 1,
            }
            match row.evidence_type {
                Some(EvidenceType::Network) => s.network += 1,
                Some(EvidenceType::Direct) => s.direct += 1,
                Some(EvidenceType::Indirect) => s.indirect += 1,
                Some(EvidenceType::Unknown) | None => s.unknown += 1,
            }
        }
        s
    }

    pub fn count(&self, level: CertaintyLevel) -> usize {
        match level {
            CertaintyLevel::High => self.high,
            CertaintyLevel::Moderate => self.moderate,
            CertaintyLevel::Low => self.low,
            CertaintyLevel::VeryLow => self.very_low,
        }
    }
}
