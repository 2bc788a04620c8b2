//! Outcome type of a meta-analysis data set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// The closed set of outcome types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeType {
    /// Event counts out of arm size (`event`, `n`).
    Binary,
    /// Arm means with standard deviations (`n`, `mean`, `sd`).
    Continuous,
}

impl OutcomeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Continuous => "continuous",
        }
    }

    /// Columns that must be present for this outcome type, in report order.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Self::Binary => &["study", "treatment", "event", "n"],
            Self::Continuous => &["study", "treatment", "n", "mean", "sd"],
        }
    }
}

impl fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutcomeType {
    type Err = InputError;

    /// Parse an outcome type. Anything outside `binary`/`continuous` is
    /// rejected rather than defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(Self::Binary),
            "continuous" => Ok(Self::Continuous),
            _ => Err(InputError::UnsupportedOutcomeType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!("binary".parse::<OutcomeType>().unwrap(), OutcomeType::Binary);
        assert_eq!(" Continuous ".parse::<OutcomeType>().unwrap(), OutcomeType::Continuous);
    }

    #[test]
    fn test_reject_unknown_type() {
        let err = "survival".parse::<OutcomeType>().unwrap_err();
        assert!(matches!(err, InputError::UnsupportedOutcomeType(ref s) if s == "survival"));
    }

    #[test]
    fn test_required_columns() {
        assert_eq!(OutcomeType::Binary.required_columns(), &["study", "treatment", "event", "n"]);
        assert!(OutcomeType::Continuous.required_columns().contains(&"sd"));
    }
}
