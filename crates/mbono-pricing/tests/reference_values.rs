//! Reference numbers for the pricing model and period calculator.
//!
//! Values were produced by the reference pricing engine and must be matched
//! to 1e-8.

use mbono_core::PeriodData;
use mbono_pricing::model::{price_derivative, root_function};
use mbono_pricing::periods::{accrued_days, periods_remaining};

#[test]
fn root_function_matches_reference() {
    let value = root_function(6.0, 4.55, PeriodData::new(22, 87), 102.733288);
    assert!(
        (value - 20.96746668).abs() < 1e-8,
        "root_function = {value}"
    );
}

#[test]
fn price_derivative_matches_reference() {
    let value = price_derivative(6.012846, 4.55, PeriodData::new(15, 22));
    assert!(
        (value - -662.8384541).abs() < 1e-8,
        "price_derivative = {value}"
    );
}

#[test]
fn periods_remaining_reference_points() {
    let cases = [(1092, 6), (1093, 7), (1091, 6), (183, 2), (182, 1), (1, 1)];
    for (days, expected) in cases {
        assert_eq!(periods_remaining(days).unwrap(), expected, "days = {days}");
    }
}

#[test]
fn accrued_days_reference_points() {
    let cases = [(182, 0), (183, 181), (181, 1)];
    for (days, expected) in cases {
        assert_eq!(accrued_days(days).unwrap(), expected, "days = {days}");
    }
}
