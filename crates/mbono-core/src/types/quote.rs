//! Bond quote input type.

use serde::{Deserialize, Serialize};

use crate::conventions::{COUPON_DECIMALS, PRICE_DECIMALS};
use mbono_math::rounding::round_to;

/// A market quote for a single fixed-coupon bond.
///
/// # Example
///
/// ```rust
/// use mbono_core::types::BondQuote;
///
/// let quote = BondQuote::new(98.1234567, 364, 8.005);
/// let rounded = quote.rounded();
/// assert_eq!(rounded.clean_price, 98.123457);
/// assert_eq!(rounded.coupon_rate, 8.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondQuote {
    /// Clean price per 100 of par.
    pub clean_price: f64,
    /// Calendar days until maturity.
    pub days_to_maturity: i32,
    /// Annual coupon rate in percent (e.g. 7.75 for 7.75%).
    pub coupon_rate: f64,
}

impl BondQuote {
    /// Creates a new quote.
    #[must_use]
    pub fn new(clean_price: f64, days_to_maturity: i32, coupon_rate: f64) -> Self {
        Self {
            clean_price,
            days_to_maturity,
            coupon_rate,
        }
    }

    /// Returns the quote with price and coupon rounded to quoting precision.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            clean_price: round_to(self.clean_price, PRICE_DECIMALS),
            days_to_maturity: self.days_to_maturity,
            coupon_rate: round_to(self.coupon_rate, COUPON_DECIMALS),
        }
    }
}
