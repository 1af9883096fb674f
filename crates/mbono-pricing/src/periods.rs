//! Coupon period accounting.
//!
//! Maps days to maturity onto the number of coupon payments still owed (K)
//! and the days accrued since the last coupon date (d). Coupon dates fall
//! on every multiple of 182 days before maturity.

use mbono_core::conventions::COUPON_PERIOD_DAYS;
use mbono_core::{MbonoError, MbonoResult, PeriodData};

fn check_days(days_to_maturity: i32) -> MbonoResult<()> {
    if days_to_maturity < 1 {
        return Err(MbonoError::invalid_days(days_to_maturity));
    }
    Ok(())
}

/// Number of coupon payments left until maturity.
///
/// `⌊(dtm − 1) / 182⌋ + 1`: one payment for 1..=182 days, and the count
/// drops by one on each coupon date.
///
/// # Errors
///
/// Returns `MbonoError::InvalidDaysToMaturity` if `days_to_maturity < 1`.
pub fn periods_remaining(days_to_maturity: i32) -> MbonoResult<i32> {
    check_days(days_to_maturity)?;
    Ok((days_to_maturity - 1) / COUPON_PERIOD_DAYS + 1)
}

/// Days accrued in the current coupon period.
///
/// Resets to zero on a coupon date.
///
/// # Errors
///
/// Returns `MbonoError::InvalidDaysToMaturity` if `days_to_maturity < 1`.
pub fn accrued_days(days_to_maturity: i32) -> MbonoResult<i32> {
    check_days(days_to_maturity)?;
    let into_period = days_to_maturity % COUPON_PERIOD_DAYS;
    if into_period == 0 {
        Ok(0)
    } else {
        Ok(COUPON_PERIOD_DAYS - into_period)
    }
}

/// Period data for a single bond.
pub fn period_data(days_to_maturity: i32) -> MbonoResult<PeriodData> {
    Ok(PeriodData::new(
        periods_remaining(days_to_maturity)?,
        accrued_days(days_to_maturity)?,
    ))
}

/// Period data for a batch of bonds, in input order.
///
/// # Errors
///
/// Fails on the first non-positive entry, reporting its index.
pub fn period_data_batch(days_to_maturity: &[i32]) -> MbonoResult<Vec<PeriodData>> {
    days_to_maturity
        .iter()
        .enumerate()
        .map(|(i, &days)| period_data(days).map_err(|e| e.at_index(i)))
        .collect()
}
