//! Fee schedules charged by payment processors and hosting platforms
//!
//! A fee schedule is a percentage of every charge plus a fixed amount per
//! charge. When several intermediaries each take a percentage (a payment
//! processor and a video platform, say) their percentages are summed into a
//! single combined rate; only the processor's fixed fee is charged per
//! transaction.

use crate::utils::percentage_to_fraction;
use serde::{Deserialize, Serialize};

/// Percentage-plus-fixed fee model applied to every charge
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct FeeSchedule {
    /// Combined percentage fee as a fraction (`0.069` for 6.9%)
    pub percentage_fee_rate: f64,
    /// Fixed fee taken once per charge, in currency units
    pub fixed_fee_per_charge: f64,
}

impl FeeSchedule {
    /// Create a fee schedule from a combined fractional rate and fixed fee
    #[must_use]
    pub const fn new(percentage_fee_rate: f64, fixed_fee_per_charge: f64) -> Self {
        Self {
            percentage_fee_rate,
            fixed_fee_per_charge,
        }
    }

    /// Create a fee schedule from several percentage fees expressed in percent
    ///
    /// # Examples
    /// ```
    /// use referral_calc_sdk::FeeSchedule;
    ///
    /// // 1.5% processor fee + 5.4% platform fee + 0.20 per charge
    /// let fees = FeeSchedule::from_percentages(&[1.5, 5.4], 0.20);
    /// assert!((fees.combined_fee_rate() - 0.069).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_percentages(percentages: &[f64], fixed_fee_per_charge: f64) -> Self {
        let total_pct: f64 = percentages.iter().sum();
        Self::new(percentage_to_fraction(total_pct), fixed_fee_per_charge)
    }

    /// The single rate applied to gross revenue
    #[must_use]
    pub const fn combined_fee_rate(&self) -> f64 {
        self.percentage_fee_rate
    }

    /// Total fees for `charges` charges that together gross `gross_amount`
    ///
    /// The percentage applies to the gross amount; the fixed fee is taken
    /// once per charge.
    #[must_use]
    pub fn fees_for(&self, gross_amount: f64, charges: f64) -> f64 {
        gross_amount * self.combined_fee_rate() + self.fixed_fee_per_charge * charges
    }
}

/// Combined fractional fee rate of a fee schedule
#[must_use]
pub const fn combined_fee_rate(fee_schedule: &FeeSchedule) -> f64 {
    fee_schedule.combined_fee_rate()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_from_percentages_sums_components() {
        let fees = FeeSchedule::from_percentages(&[1.5, 5.4], 0.20);
        assert!((fees.percentage_fee_rate - 0.069).abs() < EPSILON);
        assert!((fees.fixed_fee_per_charge - 0.20).abs() < EPSILON);
        assert!((combined_fee_rate(&fees) - 0.069).abs() < EPSILON);
    }

    #[test]
    fn test_from_percentages_empty() {
        let fees = FeeSchedule::from_percentages(&[], 0.30);
        assert!(fees.combined_fee_rate().abs() < EPSILON);
        assert!((fees.fixed_fee_per_charge - 0.30).abs() < EPSILON);
    }

    #[test]
    fn test_fees_for_scales_fixed_fee_by_charges() {
        let fees = FeeSchedule::new(0.069, 0.20);

        // Three monthly charges of 12.99
        let total = fees.fees_for(38.97, 3.0);
        assert!((total - (38.97 * 0.069 + 0.60)).abs() < EPSILON);

        // One annual charge
        let total = fees.fees_for(129.99, 1.0);
        assert!((total - (129.99 * 0.069 + 0.20)).abs() < EPSILON);
    }

    #[test]
    fn test_zero_fee_schedule() {
        let fees = FeeSchedule::default();
        assert!(fees.fees_for(100.0, 12.0).abs() < EPSILON);
    }

    #[test]
    fn test_fee_schedule_serde() {
        let fees = FeeSchedule::new(0.069, 0.2);
        let json = serde_json::to_string(&fees).unwrap();
        assert!(json.contains("\"percentage_fee_rate\":0.069"));
        assert!(json.contains("\"fixed_fee_per_charge\":0.2"));
    }
}
