//! Stage 7: final rating reason text.

use super::final_rating::StageRatings;
use super::row::ComparisonRow;
use super::types::{CertaintyLevel, Domain, EvidenceType};

fn label(level: Option<CertaintyLevel>) -> &'static str {
    level.map_or("not rated", CertaintyLevel::label)
}

fn judgment_label(row: &ComparisonRow, domain: Domain) -> &'static str {
    row.judgment(domain).map_or("not judged", |j| j.label())
}

fn levels(steps: u8) -> String {
    if steps == 1 {
        "1 level".to_string()
    } else {
        format!("{steps} levels")
    }
}

/// Explain which evidence the final rating rests on and which downgrades
/// were applied.
pub fn final_rating_reason(
    row: &ComparisonRow,
    evidence: EvidenceType,
    ratings: StageRatings,
    final_rating: Option<CertaintyLevel>,
) -> String {
    let incoherence = row.downgrade(Domain::Incoherence);

    let basis = match evidence {
        EvidenceType::Network => format!(
            "Network evidence used: direct ({}) and indirect ({}) ratings are both available and \
             incoherence is {}, so the higher rating ({}) is the starting point.",
            label(ratings.direct),
            label(ratings.indirect),
            judgment_label(row, Domain::Incoherence),
            label(ratings.combined),
        ),
        EvidenceType::Direct if ratings.indirect.is_some() => format!(
            "Direct evidence used: incoherence is {} and the direct rating ({}) is not lower than \
             the indirect rating ({}).",
            judgment_label(row, Domain::Incoherence),
            label(ratings.direct),
            label(ratings.indirect),
        ),
        EvidenceType::Indirect if ratings.direct.is_some() => format!(
            "Indirect evidence used: incoherence is {} and the indirect rating ({}) is higher than \
             the direct rating ({}).",
            judgment_label(row, Domain::Incoherence),
            label(ratings.indirect),
            label(ratings.direct),
        ),
        EvidenceType::Direct => format!(
            "Direct evidence used: no indirect estimate is available (direct rating {}).",
            label(ratings.direct),
        ),
        EvidenceType::Indirect => format!(
            "Indirect evidence used: no direct estimate is available (indirect rating {}).",
            label(ratings.indirect),
        ),
        EvidenceType::Unknown => {
            return format!(
                "Evidence type unknown: neither a direct nor an indirect estimate is available; \
                 final rating left unchanged ({}).",
                label(final_rating),
            );
        }
    };

    let mut reason = basis;
    if evidence == EvidenceType::Network && incoherence > 0 {
        reason.push_str(&format!(" Downgraded {} for incoherence.", levels(incoherence)));
    }

    let imprecision = row.downgrade(Domain::Imprecision);
    if imprecision > 0 {
        reason.push_str(&format!(
            " Imprecision is {}: downgraded {}.",
            judgment_label(row, Domain::Imprecision),
            levels(imprecision)
        ));
    } else {
        reason.push_str(&format!(
            " Imprecision is {}: no further downgrade.",
            judgment_label(row, Domain::Imprecision)
        ));
    }

    reason.push_str(&format!(" Final rating: {}.", label(final_rating)));
    reason
}
