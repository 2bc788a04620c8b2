//! Stage 3: indirect rating.

use super::row::ComparisonRow;
use super::types::{CertaintyLevel, Domain};

/// The lower of the two arm certainties minus the intransitivity downgrade.
/// `None` without an indirect estimate.
pub fn indirect_rating(
    row: &ComparisonRow,
    arm1: CertaintyLevel,
    arm2: CertaintyLevel,
) -> Option<CertaintyLevel> {
    if !row.has_indirect() {
        return None;
    }
    Some(arm1.min(arm2).downgrade(row.downgrade(Domain::Intransitivity)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_arm_minus_intransitivity() {
        let row = ComparisonRow::new("A", "B", 10.0)
            .with_indirect(0.3)
            .with_judgment(Domain::Intransitivity, "Serious");
        let rating = indirect_rating(&row, CertaintyLevel::High, CertaintyLevel::Moderate);
        assert_eq!(rating, Some(CertaintyLevel::Low));
    }

    #[test]
    fn test_clamped_at_very_low() {
        let row = ComparisonRow::new("A", "B", 10.0)
            .with_indirect(0.3)
            .with_judgment(Domain::Intransitivity, "Very serious");
        let rating = indirect_rating(&row, CertaintyLevel::Low, CertaintyLevel::Low);
        assert_eq!(rating, Some(CertaintyLevel::VeryLow));
    }

    #[test]
    fn test_no_estimate_is_none() {
        let row = ComparisonRow::new("A", "B", 10.0);
        assert_eq!(indirect_rating(&row, CertaintyLevel::High, CertaintyLevel::High), None);
    }
}
