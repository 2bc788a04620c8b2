//! Stage 6: final rating.

use super::row::ComparisonRow;
use super::types::{CertaintyLevel, Domain, EvidenceType};

/// Ratings produced by stages 1, 3 and 4 for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRatings {
    pub direct: Option<CertaintyLevel>,
    pub indirect: Option<CertaintyLevel>,
    pub combined: Option<CertaintyLevel>,
}

/// Final rating for the chosen evidence type after the incoherence (network
/// only) and imprecision downgrades. `Unknown` returns `previous` unchanged.
pub fn final_rating(
    row: &ComparisonRow,
    evidence: EvidenceType,
    ratings: StageRatings,
    previous: Option<CertaintyLevel>,
) -> Option<CertaintyLevel> {
    let base = match evidence {
        EvidenceType::Network => ratings
            .combined
            .map(|c| c.downgrade(row.downgrade(Domain::Incoherence))),
        EvidenceType::Direct => ratings.direct,
        EvidenceType::Indirect => ratings.indirect,
        EvidenceType::Unknown => return previous,
    };
    base.map(|level| level.downgrade(row.downgrade(Domain::Imprecision)))
}
