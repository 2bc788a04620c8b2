//! Stage 1: direct rating.

use super::row::ComparisonRow;
use super::types::{CertaintyLevel, Domain};

/// High minus the risk-of-bias, inconsistency, indirectness and publication
/// bias downgrades. `None` without a direct estimate.
pub fn direct_rating(row: &ComparisonRow) -> Option<CertaintyLevel> {
    if !row.has_direct() {
        return None;
    }
    let steps: u8 = Domain::DIRECT.iter().map(|&d| row.downgrade(d)).sum();
    Some(CertaintyLevel::High.downgrade(steps))
}

pub fn direct_ratings(rows: &[ComparisonRow]) -> Vec<Option<CertaintyLevel>> {
    rows.iter().map(direct_rating).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_estimate_is_none() {
        let row = ComparisonRow::new("A", "B", 10.0).with_judgment(Domain::RiskOfBias, "Serious");
        assert_eq!(direct_rating(&row), None);
    }

    #[test]
    fn test_all_not_serious_is_high() {
        let row = ComparisonRow::new("A", "B", 10.0)
            .with_direct(0.2)
            .with_judgment(Domain::RiskOfBias, "Not serious")
            .with_judgment(Domain::PublicationBias, "Undetected");
        assert_eq!(direct_rating(&row), Some(CertaintyLevel::High));
    }

    #[test]
    fn test_imprecision_does_not_affect_direct() {
        let row = ComparisonRow::new("A", "B", 10.0)
            .with_direct(0.2)
            .with_judgment(Domain::Imprecision, "Very serious")
            .with_judgment(Domain::Indirectness, "Serious");
        assert_eq!(direct_rating(&row), Some(CertaintyLevel::Moderate));
    }
}
