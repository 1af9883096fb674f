//! Yield-to-maturity solver.
//!
//! Inverts the pricing model with Newton-Raphson, starting from the current
//! yield (annualized coupon over price). The iteration stops when two
//! successive estimates agree within the configured tolerance or the
//! iteration cap is reached; either way the last estimate is returned.
//! Validating it is the caller's job, see [`crate::batch`].
//!
//! # Example
//!
//! ```rust
//! use mbono_core::PeriodData;
//! use mbono_math::solvers::SolverConfig;
//! use mbono_pricing::model::{clean_price, coupon_cash_flow};
//! use mbono_pricing::yield_solver::find_root;
//!
//! let period = PeriodData::new(10, 60);
//! let price = clean_price(7.5, 9.1, period);
//!
//! let result = find_root(coupon_cash_flow(7.5), period, price, &SolverConfig::default());
//! assert!((result.root - 9.1).abs() < 1e-7);
//! ```

use mbono_core::conventions::period_year_fraction;
use mbono_core::PeriodData;
use mbono_math::solvers::{newton_raphson, SolverConfig, SolverResult};

use crate::model::{price_derivative, root_function};

/// Current-yield starting point, in percent.
///
/// Annualized coupon cash flow divided by the target price.
#[must_use]
pub fn initial_guess(cash_flow: f64, target_price: f64) -> f64 {
    let periods_per_year = 1.0 / period_year_fraction();
    100.0 * ((cash_flow * periods_per_year) / target_price)
}

/// Solves for the annual yield (percent) that prices the bond at `target_price`.
///
/// `cash_flow` is the per-period coupon. The returned [`SolverResult`]
/// carries the estimate, the iterations spent and whether the step tolerance
/// was met. A non-converged or non-finite estimate is returned as is.
pub fn find_root(
    cash_flow: f64,
    period: PeriodData,
    target_price: f64,
    config: &SolverConfig,
) -> SolverResult {
    newton_raphson(
        |y| root_function(y, cash_flow, period, target_price),
        |y| price_derivative(y, cash_flow, period),
        initial_guess(cash_flow, target_price),
        config,
    )
}
