//! # MBono Core
//!
//! Core types, conventions, and errors for the MBono yield engine.
//!
//! This crate provides the foundational building blocks used by the pricing
//! crate:
//!
//! - **Conventions**: The fixed 182/360 coupon schedule and par value
//! - **Types**: `BondQuote`, `PeriodData`, `YieldOutcome`
//! - **Errors**: Structural input errors shared across the workspace
//!
//! ## Example
//!
//! ```rust
//! use mbono_core::prelude::*;
//!
//! let quote = BondQuote::new(98.75, 1_093, 7.75);
//! assert_eq!(quote.days_to_maturity, 1_093);
//! assert_eq!(COUPON_PERIOD_DAYS, 182);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod conventions;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::conventions::{
        COUPON_DECIMALS, COUPON_PERIOD_DAYS, PAR_VALUE, PRICE_DECIMALS, REPRICE_TOLERANCE,
        SENTINEL_YIELD, YEAR_BASE_DAYS,
    };
    pub use crate::error::{MbonoError, MbonoResult};
    pub use crate::types::{BondQuote, PeriodData, YieldOutcome, YieldStatus};
}

// Re-export commonly used types at crate root
pub use error::{MbonoError, MbonoResult};
pub use types::{BondQuote, PeriodData, YieldOutcome, YieldStatus};
