//! GRADE certainty-of-evidence cascade over pairwise comparison rows.
//!
//! Seven ordered stages, each reading only the snapshots of earlier stages:
//!
//! 1. direct rating per row
//! 2. certainty per arm via the top-ranked bridge treatments
//! 3. indirect rating per row
//! 4. higher of direct and indirect
//! 5. evidence type
//! 6. final rating
//! 7. reason text
//!
//! Every edit recomputes every row; the bridge ranking depends on the whole
//! row set.

pub mod bridges;
pub mod cascade;
pub mod direct;
pub mod evidence;
pub mod final_rating;
pub mod indirect;
pub mod reason;
pub mod row;
pub mod summary;
pub mod table;
pub mod types;

pub use bridges::BridgeRanking;
pub use cascade::{recompute_all, recompute_all_with_config};
pub use row::ComparisonRow;
pub use summary::GradeSummary;
pub use table::{EditableField, GradeTable};
pub use types::{CertaintyLevel, Domain, EvidenceType, Judgment};
