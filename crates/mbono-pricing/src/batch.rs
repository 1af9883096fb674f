//! Batch price-to-yield conversion.
//!
//! For each bond, independently:
//!
//! 1. Round the price to 6 decimals and the coupon rate to 2.
//! 2. Derive periods remaining, accrued days and the coupon cash flow.
//! 3. Solve for the yield with Newton-Raphson.
//! 4. Re-price the candidate, round to 6 decimals and compare with the
//!    rounded quote.
//! 5. Keep the yield if it is finite and the gap is below the reprice
//!    tolerance; otherwise report the sentinel yield (−1.0).
//!
//! Re-pricing is the only correctness gate. A bad bond never affects its
//! neighbours and never aborts the batch; only structural problems
//! (mismatched lengths, non-positive days to maturity, unusable
//! configuration) are returned as errors.

use mbono_core::conventions::{COUPON_DECIMALS, PRICE_DECIMALS};
use mbono_core::{BondQuote, MbonoError, MbonoResult, PeriodData, YieldOutcome, YieldStatus};
use mbono_math::rounding::round_to;

use crate::config::BatchConfig;
use crate::model::{clean_price, coupon_cash_flow};
use crate::parallel::maybe_parallel_map;
use crate::periods::{period_data, period_data_batch};
use crate::yield_solver::find_root;

/// Converts quoted clean prices into annual yields (percent).
///
/// Uses [`BatchConfig::default`]. Each entry of the result is either a
/// validated yield or the sentinel −1.0.
///
/// # Errors
///
/// Returns `MbonoError::LengthMismatch` if the slices differ in length and
/// `MbonoError::InvalidDaysToMaturity` for any entry below one day.
///
/// # Example
///
/// ```rust
/// use mbono_pricing::price_to_yield;
///
/// let yields = price_to_yield(&[98.5, 101.25], &[1_000, 2_500], &[8.0, 7.75]).unwrap();
/// assert_eq!(yields.len(), 2);
/// assert!(yields.iter().all(|y| *y > 0.0));
/// ```
pub fn price_to_yield(
    prices: &[f64],
    days_to_maturity: &[i32],
    coupon_rates: &[f64],
) -> MbonoResult<Vec<f64>> {
    let outcomes =
        price_to_yield_detailed(prices, days_to_maturity, coupon_rates, &BatchConfig::default())?;
    Ok(outcomes.into_iter().map(|o| o.yield_value).collect())
}

/// Converts quoted clean prices into yields, returning per-bond diagnostics.
///
/// Same pipeline as [`price_to_yield`] with an explicit configuration.
pub fn price_to_yield_detailed(
    prices: &[f64],
    days_to_maturity: &[i32],
    coupon_rates: &[f64],
    config: &BatchConfig,
) -> MbonoResult<Vec<YieldOutcome>> {
    config.validate()?;
    check_lengths(prices.len(), days_to_maturity.len(), coupon_rates.len())?;
    let periods = period_data_batch(days_to_maturity)?;

    let bonds: Vec<(BondQuote, PeriodData)> = prices
        .iter()
        .zip(days_to_maturity)
        .zip(coupon_rates)
        .zip(periods)
        .map(|(((&price, &days), &coupon), period)| {
            (BondQuote::new(price, days, coupon).rounded(), period)
        })
        .collect();

    let outcomes = maybe_parallel_map(&bonds, config, |(quote, period)| {
        solve_rounded(quote, *period, config)
    });

    let rejected = outcomes.iter().filter(|o| !o.is_valid()).count();
    if rejected > 0 {
        log::debug!("{} of {} bonds rejected by re-pricing", rejected, outcomes.len());
    }

    Ok(outcomes)
}

/// Solves a single quote.
///
/// # Errors
///
/// Returns an error for an unusable configuration or days to maturity
/// below one.
pub fn solve_quote(quote: &BondQuote, config: &BatchConfig) -> MbonoResult<YieldOutcome> {
    config.validate()?;
    let period = period_data(quote.days_to_maturity)?;
    Ok(solve_rounded(&quote.rounded(), period, config))
}

/// Clean prices for the given yields, rounded to quoting precision.
///
/// The forward direction of [`price_to_yield`]: coupon rates are rounded to
/// two decimals and each price to six.
///
/// # Errors
///
/// Returns `MbonoError::LengthMismatch` if the slices differ in length and
/// `MbonoError::InvalidDaysToMaturity` for any entry below one day.
pub fn yield_to_price(
    yields: &[f64],
    days_to_maturity: &[i32],
    coupon_rates: &[f64],
) -> MbonoResult<Vec<f64>> {
    check_lengths(yields.len(), days_to_maturity.len(), coupon_rates.len())?;
    let periods = period_data_batch(days_to_maturity)?;

    Ok(yields
        .iter()
        .zip(coupon_rates)
        .zip(periods)
        .map(|((&annual_yield, &coupon), period)| {
            let coupon = round_to(coupon, COUPON_DECIMALS);
            round_to(clean_price(coupon, annual_yield, period), PRICE_DECIMALS)
        })
        .collect())
}

fn check_lengths(prices: usize, days: usize, coupons: usize) -> MbonoResult<()> {
    if prices != days || prices != coupons {
        return Err(MbonoError::length_mismatch(prices, days, coupons));
    }
    Ok(())
}

/// Solves and validates one bond whose quote is already rounded.
fn solve_rounded(quote: &BondQuote, period: PeriodData, config: &BatchConfig) -> YieldOutcome {
    let cash_flow = coupon_cash_flow(quote.coupon_rate);
    let result = find_root(cash_flow, period, quote.clean_price, &config.solver);
    let candidate = result.root;

    let repriced = round_to(
        clean_price(quote.coupon_rate, candidate, period),
        PRICE_DECIMALS,
    );
    let gap = (repriced - quote.clean_price).abs();

    if !candidate.is_finite() {
        log::debug!(
            "non-finite yield for price {} ({} days, coupon {})",
            quote.clean_price,
            quote.days_to_maturity,
            quote.coupon_rate
        );
        return YieldOutcome::rejected(YieldStatus::NonFinite, result.iterations, repriced);
    }

    // NaN gaps fail this comparison as well.
    if gap < config.reprice_tolerance {
        YieldOutcome::valid(candidate, result.iterations, repriced)
    } else {
        log::debug!(
            "yield {} re-prices to {} against quote {} ({} days, coupon {})",
            candidate,
            repriced,
            quote.clean_price,
            quote.days_to_maturity,
            quote.coupon_rate
        );
        YieldOutcome::rejected(YieldStatus::RepriceMismatch, result.iterations, repriced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mbono_core::conventions::SENTINEL_YIELD;

    #[test]
    fn test_par_bond_yields_coupon() {
        let yields = price_to_yield(&[100.0], &[1_092], &[7.75]).unwrap();
        assert_relative_eq!(yields[0], 7.75, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_batch() {
        let yields = price_to_yield(&[], &[], &[]).unwrap();
        assert!(yields.is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let err = price_to_yield(&[100.0, 99.0], &[182], &[8.0, 8.0]).unwrap_err();
        assert_eq!(err, MbonoError::length_mismatch(2, 1, 2));
    }

    #[test]
    fn test_non_positive_days() {
        let err = price_to_yield(&[100.0, 99.0], &[182, 0], &[8.0, 8.0]).unwrap_err();
        assert_eq!(err, MbonoError::invalid_days_at(1, 0));
    }

    #[test]
    fn test_unusable_prices_get_sentinel() {
        let yields = price_to_yield(&[0.0, -10.0, 98.5], &[1_000; 3], &[8.0; 3]).unwrap();
        assert_eq!(yields[0], SENTINEL_YIELD);
        assert_eq!(yields[1], SENTINEL_YIELD);
        assert!(yields[2] > 8.0);
    }

    #[test]
    fn test_detailed_outcomes() {
        let outcomes = price_to_yield_detailed(
            &[0.0, 98.5],
            &[1_000, 1_000],
            &[8.0, 8.0],
            &BatchConfig::sequential(),
        )
        .unwrap();

        assert_eq!(outcomes[0].status, YieldStatus::NonFinite);
        assert_eq!(outcomes[0].yield_value, SENTINEL_YIELD);
        assert!(outcomes[1].is_valid());
        assert_eq!(outcomes[1].repriced, 98.5);
        assert!(outcomes[1].iterations > 0);
    }

    #[test]
    fn test_iteration_cap_surfaces_as_mismatch() {
        let config = BatchConfig::sequential()
            .with_solver(mbono_math::solvers::SolverConfig::default().with_max_iterations(1));
        let outcome = solve_quote(&BondQuote::new(98.5, 1_000, 8.0), &config).unwrap();
        assert_eq!(outcome.status, YieldStatus::RepriceMismatch);
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn test_inputs_are_rounded_before_solving() {
        let raw = solve_quote(&BondQuote::new(98.50000049, 1_000, 8.004), &BatchConfig::default())
            .unwrap();
        let rounded = solve_quote(&BondQuote::new(98.5, 1_000, 8.0), &BatchConfig::default())
            .unwrap();
        assert_eq!(raw.yield_value, rounded.yield_value);
    }

    #[test]
    fn test_solve_quote_rejects_bad_days() {
        let err = solve_quote(&BondQuote::new(100.0, -3, 8.0), &BatchConfig::default())
            .unwrap_err();
        assert_eq!(err, MbonoError::invalid_days(-3));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let config = BatchConfig::default().with_reprice_tolerance(-1.0);
        assert!(price_to_yield_detailed(&[100.0], &[182], &[8.0], &config).is_err());
    }

    #[test]
    fn test_yield_to_price_rounds_output() {
        let prices = yield_to_price(&[8.0, 9.3], &[1_092, 777], &[8.0, 7.5]).unwrap();
        assert_eq!(prices[0], 100.0);
        for price in &prices {
            assert_eq!(round_to(*price, PRICE_DECIMALS), *price);
        }
    }
}
