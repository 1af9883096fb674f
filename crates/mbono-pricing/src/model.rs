//! Closed-form bond pricing model.
//!
//! A bond with K coupons left and d days accrued, priced at an annual yield
//! r (in percent), discounts at the per-period rate `R = 0.01 · r · 182 / 360`.
//! Its clean price is
//!
//! ```text
//! [C + C·(1/R − 1/(R·(1+R)^(K−1))) + VN/(1+R)^(K−1)] / (1+R)^(1 − d/182) − C·d/182
//! ```
//!
//! where C is the coupon cash flow and VN the par value: the next coupon,
//! the annuity of the remaining K − 1 coupons and the redemption, all
//! brought back by the fraction of the period still to run, less the
//! interest accrued so far.
//!
//! [`clean_price`] evaluates that expression directly. [`root_function`]
//! expands the same price into four separately discounted terms, and
//! [`price_derivative`] differentiates those terms one by one. The solver
//! uses the expanded pair; the batch re-prices with [`clean_price`].

use mbono_core::conventions::{
    period_year_fraction, COUPON_PERIOD_DAYS, PAR_VALUE, YEAR_BASE_DAYS,
};
use mbono_core::PeriodData;

/// Converts an annual yield in percent into the per-period rate R.
#[inline]
#[must_use]
pub fn period_rate(annual_yield: f64) -> f64 {
    0.01 * annual_yield * f64::from(COUPON_PERIOD_DAYS) / f64::from(YEAR_BASE_DAYS)
}

/// Coupon cash flow per period for an annual coupon rate in percent.
///
/// # Example
///
/// ```rust
/// use mbono_pricing::model::coupon_cash_flow;
///
/// // 8% on 100 par over 182 of 360 days.
/// assert!((coupon_cash_flow(8.0) - 4.044444444444444).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn coupon_cash_flow(coupon_rate: f64) -> f64 {
    let period_days = f64::from(COUPON_PERIOD_DAYS);
    PAR_VALUE * ((0.01 * coupon_rate * period_days) / f64::from(YEAR_BASE_DAYS))
}

/// Clean price per 100 par at the given annual yield (percent).
#[must_use]
pub fn clean_price(coupon_rate: f64, annual_yield: f64, period: PeriodData) -> f64 {
    let r = period_rate(annual_yield);
    let c = PAR_VALUE * (f64::from(COUPON_PERIOD_DAYS) * 0.01 * coupon_rate)
        / f64::from(YEAR_BASE_DAYS);
    let k = f64::from(period.periods_remaining);
    let x = period.accrued_fraction();

    let growth = 1.0 + r;
    let remaining = c
        + c * (1.0 / r - 1.0 / (r * growth.powf(k - 1.0)))
        + PAR_VALUE / growth.powf(k - 1.0);

    remaining / growth.powf(1.0 - x) - period.accrued_interest(c)
}

/// Model price minus `target_price`; zero at the yield that reproduces the quote.
///
/// `cash_flow` is the per-period coupon C (see [`coupon_cash_flow`]).
#[must_use]
pub fn root_function(
    annual_yield: f64,
    cash_flow: f64,
    period: PeriodData,
    target_price: f64,
) -> f64 {
    let r = period_rate(annual_yield);
    let c = cash_flow;
    let k = f64::from(period.periods_remaining);
    let x = period.accrued_fraction();
    let growth = 1.0 + r;

    let next_coupon = c / growth.powf(1.0 - x);
    let annuity_head = c / (r * growth.powf(1.0 - x));
    let annuity_tail = c / (r * growth.powf(k - x));
    let redemption = PAR_VALUE / growth.powf(k - x);

    next_coupon + annuity_head - annuity_tail + redemption
        - period.accrued_interest(c)
        - target_price
}

/// Closed-form slope of [`root_function`].
///
/// Each of the four discounted terms is differentiated through R and the
/// sum scaled by 182 / 360. The result is the price sensitivity per unit of
/// decimal yield, i.e. with respect to `annual_yield / 100`; divide by 100
/// for the slope per percentage point.
#[must_use]
pub fn price_derivative(annual_yield: f64, cash_flow: f64, period: PeriodData) -> f64 {
    let r = period_rate(annual_yield);
    let c = cash_flow;
    let k = f64::from(period.periods_remaining);
    let x = period.accrued_fraction();
    let growth = 1.0 + r;

    let next_coupon = c * (x - 1.0) * growth.powf(x - 2.0);
    let annuity_head = c
        * ((1.0 / r) * (x - 1.0) * growth.powf(x - 2.0) - (1.0 / (r * r)) * growth.powf(x - 1.0));
    let annuity_tail = c
        * ((1.0 / r) * (x - k) * growth.powf(x - k - 1.0) - (1.0 / (r * r)) * growth.powf(x - k));
    let redemption = PAR_VALUE * (x - k) * growth.powf(x - k - 1.0);

    period_year_fraction() * (next_coupon + annuity_head - annuity_tail + redemption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_period_rate() {
        assert_relative_eq!(period_rate(7.2), 0.0364, epsilon = 1e-15);
    }

    #[test]
    fn test_par_bond_on_coupon_date() {
        // At a yield equal to the coupon, a bond on a coupon date prices at par.
        let price = clean_price(8.0, 8.0, PeriodData::new(6, 0));
        assert_relative_eq!(price, 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_single_period_bond() {
        // One coupon left: (C + 100) discounted over the unexpired fraction.
        let period = PeriodData::new(1, 91);
        let c = coupon_cash_flow(6.0);
        let r = period_rate(9.0);
        let expected = (c + 100.0) / (1.0 + r).powf(0.5) - c * 0.5;
        assert_relative_eq!(clean_price(6.0, 9.0, period), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_price_falls_as_yield_rises() {
        let period = PeriodData::new(20, 45);
        let low = clean_price(7.0, 6.0, period);
        let high = clean_price(7.0, 9.0, period);
        assert!(low > high);
    }

    #[test]
    fn test_root_function_agrees_with_clean_price() {
        let period = PeriodData::new(22, 87);
        let c = coupon_cash_flow(4.55);
        let price = clean_price(4.55, 6.0, period);
        assert!(root_function(6.0, c, period, price).abs() < 1e-10);
    }

    #[test]
    fn test_root_function_reference_value() {
        let value = root_function(6.0, 4.55, PeriodData::new(22, 87), 102.733288);
        assert!((value - 20.96746668).abs() < 1e-8);
    }

    #[test]
    fn test_price_derivative_reference_value() {
        let value = price_derivative(6.012846, 4.55, PeriodData::new(15, 22));
        assert!((value - -662.8384541).abs() < 1e-8);
    }

    #[test]
    fn test_root_function_matches_raw_expression_bitwise() {
        // Solver inputs must not drift from the closed form by even one ulp.
        let (c, k, d, target) = (4.55, 22.0, 87.0, 102.733288);
        let r = 0.01 * 6.0 * 182.0 / 360.0;
        let g: f64 = 1.0 + r;
        let expected = c / g.powf(1.0 - d / 182.0) + c / (r * g.powf(1.0 - d / 182.0))
            - c / (r * g.powf(k - d / 182.0))
            + 100.0 / g.powf(k - d / 182.0)
            - c * d / 182.0
            - target;

        assert_eq!(root_function(6.0, c, PeriodData::new(22, 87), target), expected);
    }

    #[test]
    fn test_clean_price_matches_raw_expression_bitwise() {
        let (tc, k, d) = (7.75, 9.0, 130.0);
        let r = 0.01 * 8.3 * 182.0 / 360.0;
        let c = 100.0 * (182.0 * 0.01 * tc) / 360.0;
        let g: f64 = 1.0 + r;
        let expected = (c + c * (1.0 / r - 1.0 / (r * g.powf(k - 1.0))) + 100.0 / g.powf(k - 1.0))
            / g.powf(1.0 - d / 182.0)
            - c * d / 182.0;

        assert_eq!(clean_price(tc, 8.3, PeriodData::new(9, 130)), expected);
    }

    #[test]
    fn test_price_derivative_matches_finite_difference() {
        let period = PeriodData::new(9, 130);
        let c = coupon_cash_flow(8.5);
        let h = 1e-5;
        for yield_pct in [2.0, 7.5, 15.0] {
            let numeric = (root_function(yield_pct + h, c, period, 0.0)
                - root_function(yield_pct - h, c, period, 0.0))
                / (2.0 * h);
            let analytic = price_derivative(yield_pct, c, period) / 100.0;
            assert_relative_eq!(analytic, numeric, max_relative = 1e-6);
        }
    }
}
