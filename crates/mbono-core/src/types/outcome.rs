//! Per-bond yield result with diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::conventions::SENTINEL_YIELD;

/// Validation status of a solved yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YieldStatus {
    /// The yield re-prices to the quoted price.
    Valid,
    /// The solver produced NaN or an infinite yield.
    NonFinite,
    /// The yield is finite but re-prices away from the quote.
    RepriceMismatch,
}

impl fmt::Display for YieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Valid => "valid",
            Self::NonFinite => "non-finite",
            Self::RepriceMismatch => "reprice mismatch",
        };
        write!(f, "{name}")
    }
}

/// Outcome of solving one bond.
///
/// `yield_value` holds the annualized yield in percent when `status` is
/// [`YieldStatus::Valid`] and [`SENTINEL_YIELD`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldOutcome {
    /// Annualized yield in percent, or the sentinel.
    pub yield_value: f64,
    /// Validation status.
    pub status: YieldStatus,
    /// Solver iterations spent.
    pub iterations: u32,
    /// Clean price re-computed from the raw solver estimate, rounded to
    /// quoting precision.
    pub repriced: f64,
}

impl YieldOutcome {
    /// Creates an accepted outcome.
    #[must_use]
    pub fn valid(yield_value: f64, iterations: u32, repriced: f64) -> Self {
        Self {
            yield_value,
            status: YieldStatus::Valid,
            iterations,
            repriced,
        }
    }

    /// Creates a rejected outcome carrying the sentinel yield.
    #[must_use]
    pub fn rejected(status: YieldStatus, iterations: u32, repriced: f64) -> Self {
        Self {
            yield_value: SENTINEL_YIELD,
            status,
            iterations,
            repriced,
        }
    }

    /// Returns true if the yield passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.status == YieldStatus::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_carries_sentinel() {
        let outcome = YieldOutcome::rejected(YieldStatus::RepriceMismatch, 12, 99.5);
        assert_eq!(outcome.yield_value, SENTINEL_YIELD);
        assert!(!outcome.is_valid());
    }

    #[test]
    fn test_valid() {
        let outcome = YieldOutcome::valid(8.25, 40, 98.0);
        assert!(outcome.is_valid());
        assert_eq!(outcome.yield_value, 8.25);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(YieldStatus::NonFinite.to_string(), "non-finite");
        assert_eq!(YieldStatus::RepriceMismatch.to_string(), "reprice mismatch");
    }
}
