//! Stages 4 and 5: combined rating and evidence type.

use super::row::ComparisonRow;
use super::types::{CertaintyLevel, Domain, EvidenceType};

/// The higher of the direct and indirect ratings.
pub fn combined_rating(
    direct: Option<CertaintyLevel>,
    indirect: Option<CertaintyLevel>,
) -> Option<CertaintyLevel> {
    match (direct, indirect) {
        (Some(d), Some(i)) => Some(d.max(i)),
        (d, i) => d.or(i),
    }
}

/// Network evidence when both ratings exist and incoherence is not serious;
/// with serious incoherence the higher of the two wins, ties going to direct.
pub fn evidence_type(
    row: &ComparisonRow,
    direct: Option<CertaintyLevel>,
    indirect: Option<CertaintyLevel>,
) -> EvidenceType {
    match (direct, indirect) {
        (Some(d), Some(i)) => {
            if row.downgrade(Domain::Incoherence) == 0 {
                EvidenceType::Network
            } else if d >= i {
                EvidenceType::Direct
            } else {
                EvidenceType::Indirect
            }
        }
        (Some(_), None) => EvidenceType::Direct,
        (None, Some(_)) => EvidenceType::Indirect,
        (None, None) => EvidenceType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::types::CertaintyLevel::*;

    #[test]
    fn test_combined_takes_higher() {
        assert_eq!(combined_rating(Some(Low), Some(Moderate)), Some(Moderate));
        assert_eq!(combined_rating(None, Some(VeryLow)), Some(VeryLow));
        assert_eq!(combined_rating(None, None), None);
    }

    #[test]
    fn test_evidence_type_selection() {
        let coherent = ComparisonRow::new("A", "B", 1.0);
        assert_eq!(evidence_type(&coherent, Some(Low), Some(High)), EvidenceType::Network);

        let incoherent = ComparisonRow::new("A", "B", 1.0).with_judgment(Domain::Incoherence, "Serious");
        assert_eq!(evidence_type(&incoherent, Some(Low), Some(High)), EvidenceType::Indirect);
        assert_eq!(evidence_type(&incoherent, Some(Low), Some(Low)), EvidenceType::Direct);

        assert_eq!(evidence_type(&coherent, Some(Low), None), EvidenceType::Direct);
        assert_eq!(evidence_type(&coherent, None, Some(Low)), EvidenceType::Indirect);
        assert_eq!(evidence_type(&coherent, None, None), EvidenceType::Unknown);
    }
}
