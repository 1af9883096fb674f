//! Decimal rounding for quoted values.
//!
//! Quotes are rounded half away from zero at a fixed number of decimal
//! places, which is what [`f64::round`] does after scaling.

/// Rounds `value` to `decimals` decimal places, half away from zero.
///
/// # Example
///
/// ```rust
/// use mbono_math::rounding::round_to;
///
/// assert_eq!(round_to(101.2345675, 6), 101.234568);
/// assert_eq!(round_to(7.755, 2), 7.76);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
