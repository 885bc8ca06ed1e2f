//! Error types for chart construction and per-planet computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::graha::Graha;

/// Errors from chart validation or per-planet lookups.
///
/// `MissingAscendant` and `MissingPositions` are structural: the whole
/// analysis for the chart aborts. `MissingGraha` is localized to one
/// planet's computation and leaves other planets unaffected.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Chart document has no ascendant.
    MissingAscendant,
    /// Chart document has no planetary positions.
    MissingPositions,
    /// A required graha is absent from the position set.
    MissingGraha(Graha),
    /// The requested computation is not defined for this graha
    /// (e.g. Shad Bala for the lunar nodes).
    UnsupportedGraha(Graha),
    /// A component needs birth date/time fields the chart does not carry.
    MissingBirthInfo,
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAscendant => write!(f, "chart is missing the ascendant"),
            Self::MissingPositions => write!(f, "chart has no planetary positions"),
            Self::MissingGraha(g) => write!(f, "no position for {g} in chart"),
            Self::UnsupportedGraha(g) => write!(f, "computation not defined for {g}"),
            Self::MissingBirthInfo => write!(f, "chart is missing birth date/time fields"),
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_missing_field() {
        let msg = ChartError::MissingGraha(Graha::Jupiter).to_string();
        assert!(msg.contains("Jupiter"));
    }

    #[test]
    fn structural_errors_distinct() {
        assert_ne!(ChartError::MissingAscendant, ChartError::MissingPositions);
    }
}
