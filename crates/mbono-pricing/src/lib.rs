//! # MBono Pricing
//!
//! Price-to-yield conversion for fixed-coupon bonds on a 182-day coupon
//! period and a 360-day year (par 100).
//!
//! This crate provides:
//!
//! - **Periods**: Coupon periods remaining and accrued days from days to maturity
//! - **Model**: Closed-form clean price, the solver's root function and its derivative
//! - **Yield Solver**: Newton-Raphson inversion of the model
//! - **Batch**: Rounding, solving and re-pricing validation over many bonds
//!
//! ## Example
//!
//! ```rust
//! use mbono_pricing::price_to_yield;
//!
//! let yields = price_to_yield(&[100.0, 0.0], &[1_092, 1_092], &[7.75, 7.75]).unwrap();
//! assert!((yields[0] - 7.75).abs() < 1e-9);
//! assert_eq!(yields[1], -1.0); // unusable quote
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_lossless)]

pub mod batch;
pub mod config;
pub mod model;
mod parallel;
pub mod periods;
pub mod yield_solver;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{price_to_yield, price_to_yield_detailed, solve_quote, yield_to_price};
    pub use crate::config::BatchConfig;
    pub use crate::model::{clean_price, coupon_cash_flow, period_rate, price_derivative, root_function};
    pub use crate::periods::{accrued_days, period_data, period_data_batch, periods_remaining};
    pub use crate::yield_solver::{find_root, initial_guess};
    pub use mbono_core::prelude::*;
    pub use mbono_math::solvers::{SolverConfig, SolverResult};
}

pub use batch::{price_to_yield, price_to_yield_detailed, solve_quote, yield_to_price};
pub use config::BatchConfig;
