//! Coupon period bookkeeping derived from days to maturity.

use serde::{Deserialize, Serialize};

use crate::conventions::COUPON_PERIOD_DAYS;

/// Coupon periods remaining (K) and days accrued in the current period (d).
///
/// Values are derived from days to maturity and are never stored. For any
/// positive days to maturity `periods_remaining >= 1` and
/// `0 <= accrued_days < 182`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodData {
    /// Number of coupon payments still owed, including the one at maturity.
    pub periods_remaining: i32,
    /// Days elapsed since the last coupon date.
    pub accrued_days: i32,
}

impl PeriodData {
    /// Creates period data from its two components.
    #[must_use]
    pub fn new(periods_remaining: i32, accrued_days: i32) -> Self {
        Self {
            periods_remaining,
            accrued_days,
        }
    }

    /// Accrued days as a fraction of the coupon period (d / 182).
    #[must_use]
    pub fn accrued_fraction(&self) -> f64 {
        f64::from(self.accrued_days) / f64::from(COUPON_PERIOD_DAYS)
    }

    /// Interest accrued on a per-period `cash_flow` so far (C · d / 182).
    ///
    /// Multiplies before dividing, so the result is not always bit-equal to
    /// `cash_flow * self.accrued_fraction()`.
    #[must_use]
    pub fn accrued_interest(&self, cash_flow: f64) -> f64 {
        cash_flow * f64::from(self.accrued_days) / f64::from(COUPON_PERIOD_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accrued_fraction_is_floating_point() {
        let period = PeriodData::new(3, 91);
        assert_relative_eq!(period.accrued_fraction(), 0.5);
        assert_eq!(PeriodData::new(5, 87).accrued_fraction(), 87.0 / 182.0);
    }

    #[test]
    fn test_payment_date() {
        let period = PeriodData::new(1, 0);
        assert_eq!(period.accrued_fraction(), 0.0);
        assert_eq!(period.accrued_interest(4.55), 0.0);
    }

    #[test]
    fn test_accrued_interest_multiplies_first() {
        let period = PeriodData::new(22, 87);
        assert_eq!(period.accrued_interest(4.55), 4.55 * 87.0 / 182.0);
    }
}
