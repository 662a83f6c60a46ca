//! Plan economics: lifetime value, fees, acquisition cost and profit
//!
//! One function, [`compute_plan_metrics`], covers both billing models. A
//! recurring plan is charged once per retained period, so its gross value
//! and its fixed fees both scale with retention. A one-time plan (an annual
//! subscription paid up front) is charged exactly once.
//!
//! Acquisition cost is the referral commission, always taken on the plan's
//! gross list price rather than on revenue net of fees.

use crate::{
    fees::FeeSchedule,
    utils::{percent_of, percentage_to_fraction},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a plan is charged
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Billing {
    /// Charged every period for as long as the customer is retained
    Recurring {
        /// Average number of billing periods a customer stays
        retention_periods: u32,
    },
    /// Charged once (e.g. an annual plan paid up front)
    OneTime,
}

impl Billing {
    /// Whether the plan charges every period
    #[must_use]
    pub const fn is_recurring(self) -> bool {
        matches!(self, Self::Recurring { .. })
    }

    /// Number of charges over the customer lifetime
    ///
    /// One-time plans always count as a single charge.
    #[must_use]
    pub const fn charges(self) -> u32 {
        match self {
            Self::Recurring { retention_periods } => retention_periods,
            Self::OneTime => 1,
        }
    }
}

impl fmt::Display for Billing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recurring { retention_periods } => {
                write!(f, "recurring x{retention_periods}")
            }
            Self::OneTime => write!(f, "one-time"),
        }
    }
}

/// Economics of one subscription tier
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlanInputs {
    /// List price per charge
    pub price: f64,
    /// Referral commission in percent of the list price (`30.0` for 30%)
    pub commission_rate: f64,
    /// Billing model
    pub billing: Billing,
}

impl PlanInputs {
    /// A plan charged every period for `retention_periods` periods
    #[must_use]
    pub const fn recurring(price: f64, commission_rate: f64, retention_periods: u32) -> Self {
        Self {
            price,
            commission_rate,
            billing: Billing::Recurring { retention_periods },
        }
    }

    /// A plan charged once
    #[must_use]
    pub const fn one_time(price: f64, commission_rate: f64) -> Self {
        Self {
            price,
            commission_rate,
            billing: Billing::OneTime,
        }
    }

    /// Build plan inputs from an explicit recurring flag
    ///
    /// `retention_periods` is ignored when `is_recurring` is false.
    #[must_use]
    pub const fn with_flag(
        price: f64,
        commission_rate: f64,
        retention_periods: u32,
        is_recurring: bool,
    ) -> Self {
        if is_recurring {
            Self::recurring(price, commission_rate, retention_periods)
        } else {
            Self::one_time(price, commission_rate)
        }
    }
}

/// Derived metrics for one plan
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlanMetrics {
    /// Revenue over the customer lifetime before fees
    pub gross_clv: f64,
    /// Percentage and fixed fees over the customer lifetime
    pub total_fees: f64,
    /// `gross_clv - total_fees`
    pub net_revenue: f64,
    /// Referral commission paid to acquire the customer
    pub cac: f64,
    /// `net_revenue - cac`
    pub profit: f64,
    /// CAC as a percentage of net revenue, `0` when net revenue is zero
    pub cac_pct_of_net_revenue: f64,
    /// CAC as a percentage of gross CLV, `0` when gross CLV is zero
    pub cac_pct_of_gross_clv: f64,
}

/// Acquisition cost for a commission rate (in percent) on a gross price
///
/// # Examples
/// ```
/// use referral_calc_sdk::plan::acquisition_cost;
///
/// assert!((acquisition_cost(30.0, 129.99) - 38.997).abs() < 1e-9);
/// ```
#[must_use]
pub fn acquisition_cost(commission_rate: f64, price: f64) -> f64 {
    percentage_to_fraction(commission_rate) * price
}

/// Compute lifetime value, fees, CAC and profitability for a plan
///
/// Never fails. Zero or negative inputs produce arithmetically consistent
/// outputs; both ratios report `0` when their denominator is zero.
///
/// # Examples
/// ```
/// use referral_calc_sdk::{compute_plan_metrics, FeeSchedule, PlanInputs};
///
/// let fees = FeeSchedule::new(0.069, 0.20);
/// let monthly = compute_plan_metrics(&fees, &PlanInputs::recurring(12.99, 30.0, 3));
///
/// assert!((monthly.gross_clv - 38.97).abs() < 1e-9);
/// assert!((monthly.net_revenue - 35.681_07).abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_plan_metrics(fee_schedule: &FeeSchedule, plan: &PlanInputs) -> PlanMetrics {
    let charges = f64::from(plan.billing.charges());

    let gross_clv = plan.price * charges;
    let total_fees = fee_schedule.fees_for(gross_clv, charges);
    let net_revenue = gross_clv - total_fees;

    let cac = acquisition_cost(plan.commission_rate, plan.price);
    let profit = net_revenue - cac;

    PlanMetrics {
        gross_clv,
        total_fees,
        net_revenue,
        cac,
        profit,
        cac_pct_of_net_revenue: percent_of(cac, net_revenue),
        cac_pct_of_gross_clv: percent_of(cac, gross_clv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn fees() -> FeeSchedule {
        FeeSchedule::new(0.069, 0.20)
    }

    #[test]
    fn test_recurring_plan_metrics() {
        let metrics = compute_plan_metrics(&fees(), &PlanInputs::recurring(12.99, 30.0, 3));

        assert!((metrics.gross_clv - 38.97).abs() < EPSILON);
        assert!((metrics.total_fees - (38.97 * 0.069 + 0.60)).abs() < EPSILON);
        assert!((metrics.net_revenue - 35.681_07).abs() < EPSILON);
        assert!((metrics.cac - 3.897).abs() < EPSILON);
        assert!((metrics.profit - 31.784_07).abs() < EPSILON);
        assert!((metrics.cac_pct_of_gross_clv - 10.0).abs() < EPSILON);
        assert!((metrics.cac_pct_of_net_revenue - 3.897 / 35.681_07 * 100.0).abs() < EPSILON);
    }

    #[test]
    fn test_one_time_plan_metrics() {
        let metrics = compute_plan_metrics(&fees(), &PlanInputs::one_time(129.99, 30.0));

        assert!((metrics.gross_clv - 129.99).abs() < EPSILON);
        assert!((metrics.total_fees - 9.169_31).abs() < EPSILON);
        assert!((metrics.net_revenue - 120.820_69).abs() < EPSILON);
        assert!((metrics.cac - 38.997).abs() < EPSILON);
        assert!((metrics.profit - 81.823_69).abs() < EPSILON);
    }

    #[test]
    fn test_cac_uses_gross_price_not_clv() {
        // Longer retention raises CLV but not the one-off commission
        let short = compute_plan_metrics(&fees(), &PlanInputs::recurring(10.0, 50.0, 1));
        let long = compute_plan_metrics(&fees(), &PlanInputs::recurring(10.0, 50.0, 12));

        assert!((short.cac - 5.0).abs() < EPSILON);
        assert!((long.cac - 5.0).abs() < EPSILON);
        assert!(long.gross_clv > short.gross_clv);
    }

    #[test]
    fn test_zero_net_revenue_reports_zero_ratio() {
        // A 100% fee rate wipes out net revenue entirely
        let all_fees = FeeSchedule::new(1.0, 0.0);
        let metrics = compute_plan_metrics(&all_fees, &PlanInputs::one_time(50.0, 20.0));

        assert!(metrics.net_revenue.abs() < EPSILON);
        assert!(metrics.cac > 0.0);
        assert!(metrics.cac_pct_of_net_revenue.abs() < EPSILON);
    }

    #[test]
    fn test_zero_price_is_well_defined() {
        let metrics = compute_plan_metrics(&fees(), &PlanInputs::recurring(0.0, 30.0, 3));

        assert!(metrics.gross_clv.abs() < EPSILON);
        assert!((metrics.total_fees - 0.60).abs() < EPSILON);
        assert!((metrics.net_revenue + 0.60).abs() < EPSILON);
        assert!(metrics.cac.abs() < EPSILON);
        assert!(metrics.cac_pct_of_gross_clv.abs() < EPSILON);
        assert!(metrics.cac_pct_of_net_revenue.abs() < EPSILON);
        assert!(!metrics.profit.is_nan());
    }

    #[test]
    fn test_zero_retention_charges_nothing() {
        let metrics = compute_plan_metrics(&fees(), &PlanInputs::recurring(12.99, 30.0, 0));

        assert!(metrics.gross_clv.abs() < EPSILON);
        assert!(metrics.total_fees.abs() < EPSILON);
        assert!((metrics.profit + 3.897).abs() < EPSILON);
        assert!(metrics.cac_pct_of_gross_clv.abs() < EPSILON);
    }

    #[test]
    fn test_with_flag_matches_constructors() {
        assert_eq!(
            PlanInputs::with_flag(12.99, 30.0, 3, true),
            PlanInputs::recurring(12.99, 30.0, 3)
        );
        assert_eq!(
            PlanInputs::with_flag(129.99, 30.0, 3, false),
            PlanInputs::one_time(129.99, 30.0)
        );
    }

    #[test]
    fn test_billing_helpers() {
        let recurring = Billing::Recurring {
            retention_periods: 6,
        };
        assert!(recurring.is_recurring());
        assert_eq!(recurring.charges(), 6);
        assert_eq!(recurring.to_string(), "recurring x6");

        assert!(!Billing::OneTime.is_recurring());
        assert_eq!(Billing::OneTime.charges(), 1);
        assert_eq!(Billing::OneTime.to_string(), "one-time");
    }
}
