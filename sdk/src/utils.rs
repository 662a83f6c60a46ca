//! General utility functions for percentage math
//!
//! Every ratio in the formula engine goes through [`percent_of`], which
//! reports `0` instead of dividing by zero so that a calculator being fed
//! half-typed values never produces `NaN` or infinities.

#![forbid(unsafe_code)]

/// Percentage points per whole
pub const PERCENT_DIVISOR: f64 = 100.0;

/// Express `part` as a percentage of `whole`
///
/// Returns `0.0` when `whole` is zero.
///
/// # Examples
/// ```
/// use referral_calc_sdk::utils::percent_of;
///
/// assert_eq!(percent_of(25.0, 200.0), 12.5);
/// assert_eq!(percent_of(25.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    part / whole * PERCENT_DIVISOR
}

/// Convert a percentage (e.g. `30.0` for 30%) into a fraction (`0.3`)
///
/// # Examples
/// ```
/// use referral_calc_sdk::utils::percentage_to_fraction;
///
/// assert_eq!(percentage_to_fraction(50.0), 0.5);
/// ```
#[must_use]
pub fn percentage_to_fraction(percentage: f64) -> f64 {
    percentage / PERCENT_DIVISOR
}

/// Divide, reporting `0.0` for a zero denominator
///
/// # Examples
/// ```
/// use referral_calc_sdk::utils::safe_div;
///
/// assert_eq!(safe_div(10.0, 4.0), 2.5);
/// assert_eq!(safe_div(10.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

/// Round a value to two decimal places for presentation
///
/// The engine never rounds its own outputs; this is for callers.
///
/// # Examples
/// ```
/// use referral_calc_sdk::utils::round_cents;
///
/// assert_eq!(round_cents(3.288_93), 3.29);
/// ```
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
