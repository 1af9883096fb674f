//! Error types for the MBono yield engine.
//!
//! Only structural problems are errors. Numerical failures of an individual
//! bond are reported in-band through the sentinel yield.

use mbono_math::MathError;
use thiserror::Error;

/// A specialized Result type for MBono operations.
pub type MbonoResult<T> = Result<T, MbonoError>;

/// The main error type for MBono operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MbonoError {
    /// Input sequences of a batch call have different lengths.
    #[error(
        "Input length mismatch: {prices} prices, {days_to_maturity} days to maturity, \
         {coupon_rates} coupon rates"
    )]
    LengthMismatch {
        /// Number of prices supplied.
        prices: usize,
        /// Number of days-to-maturity values supplied.
        days_to_maturity: usize,
        /// Number of coupon rates supplied.
        coupon_rates: usize,
    },

    /// Days to maturity must be at least one.
    #[error("Invalid days to maturity {days}{}", index_suffix(.index))]
    InvalidDaysToMaturity {
        /// Position in the batch, if the value came from one.
        index: Option<usize>,
        /// The offending value.
        days: i32,
    },

    /// Invalid engine configuration.
    #[error("Configuration error: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },

    /// Solver configuration rejected by the math layer.
    #[error("Solver error: {0}")]
    Solver(#[from] MathError),
}

impl MbonoError {
    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(prices: usize, days_to_maturity: usize, coupon_rates: usize) -> Self {
        Self::LengthMismatch {
            prices,
            days_to_maturity,
            coupon_rates,
        }
    }

    /// Creates an invalid days-to-maturity error for a scalar input.
    #[must_use]
    pub fn invalid_days(days: i32) -> Self {
        Self::InvalidDaysToMaturity { index: None, days }
    }

    /// Creates an invalid days-to-maturity error for a batch element.
    #[must_use]
    pub fn invalid_days_at(index: usize, days: i32) -> Self {
        Self::InvalidDaysToMaturity {
            index: Some(index),
            days,
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Attaches a batch index to a scalar days-to-maturity error.
    #[must_use]
    pub fn at_index(self, index: usize) -> Self {
        match self {
            Self::InvalidDaysToMaturity { days, .. } => Self::invalid_days_at(index, days),
            other => other,
        }
    }
}

fn index_suffix(index: &Option<usize>) -> String {
    index.map(|i| format!(" at index {i}")).unwrap_or_default()
}
