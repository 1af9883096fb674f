//! Market conventions for Bono M style fixed-coupon bonds.
//!
//! Coupons are paid every 182 days on a 360-day year, on a par value of 100.
//! Quotes carry six decimals for the clean price and two for the coupon rate.

/// Par (face) value per bond.
pub const PAR_VALUE: f64 = 100.0;

/// Days in one coupon period.
pub const COUPON_PERIOD_DAYS: i32 = 182;

/// Days in the year used to annualize rates.
pub const YEAR_BASE_DAYS: i32 = 360;

/// Decimal places a clean price is quoted with.
pub const PRICE_DECIMALS: i32 = 6;

/// Decimal places a coupon rate is quoted with.
pub const COUPON_DECIMALS: i32 = 2;

/// Largest accepted gap between a re-priced yield and the quoted price.
pub const REPRICE_TOLERANCE: f64 = 2e-6;

/// Yield reported for a bond whose solve could not be validated.
pub const SENTINEL_YIELD: f64 = -1.0;

/// Coupon period length as a fraction of the year base (182 / 360).
#[must_use]
pub fn period_year_fraction() -> f64 {
    f64::from(COUPON_PERIOD_DAYS) / f64::from(YEAR_BASE_DAYS)
}
