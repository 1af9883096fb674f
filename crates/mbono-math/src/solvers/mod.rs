//! Root-finding algorithms.
//!
//! This module provides [`newton_raphson`], the Newton-Raphson iteration used
//! to invert the bond pricing model, together with its configuration and
//! result types.
//!
//! The solver never fails: it stops either when successive estimates agree
//! within [`SolverConfig::tolerance`] or when [`SolverConfig::max_iterations`]
//! is exhausted, and always returns its last estimate. Whether that estimate
//! is usable is decided by the caller, typically by re-pricing.
//!
//! # Example: YTM Calculation
//!
//! ```rust
//! use mbono_math::solvers::{newton_raphson, SolverConfig};
//!
//! // Bond: 5% coupon, 5 years, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let d_price_fn = |y: f64| {
//!     let mut dpv = 0.0;
//!     for t in 1..=5 {
//!         dpv -= (t as f64) * 5.0 / (1.0 + y).powi(t + 1);
//!     }
//!     dpv -= 5.0 * 100.0 / (1.0 + y).powi(6);
//!     dpv
//! };
//!
//! let result = newton_raphson(price_fn, d_price_fn, 0.05, &SolverConfig::default());
//! assert!(result.converged);
//! assert!(result.root > 0.05); // YTM > coupon rate for discount bond
//! ```

mod newton;

pub use newton::newton_raphson;

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Default step tolerance for root finding.
pub const DEFAULT_TOLERANCE: f64 = 7e-11;

/// Default maximum iterations for root finding.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10_000;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Convergence threshold on the distance between successive estimates.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the configuration can drive an iteration.
    ///
    /// # Errors
    ///
    /// Returns `MathError::InvalidInput` if the tolerance is not a positive
    /// finite number or the iteration cap is zero.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(MathError::invalid_input(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::invalid_input(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The last estimate produced by the iteration.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Distance between the last two estimates.
    pub last_step: f64,
    /// Whether the step tolerance was met before the iteration cap.
    pub converged: bool,
}
