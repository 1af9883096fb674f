//! Domain types for the yield engine.
//!
//! - [`BondQuote`]: Quoted clean price, days to maturity and coupon rate
//! - [`PeriodData`]: Coupon periods remaining and days accrued
//! - [`YieldOutcome`]: Validated yield with solver diagnostics

mod outcome;
mod period;
mod quote;

pub use outcome::{YieldOutcome, YieldStatus};
pub use period::PeriodData;
pub use quote::BondQuote;
