//! Metrics calculator
//!
//! Runs the whole formula engine over one fully resolved [`Inputs`] record:
//! plan metrics for the monthly and annual plans, the referral projection
//! built on them, and the ROI of the chosen tracking tier. Every call
//! recomputes everything from its arguments; nothing is cached.

use crate::{
    fees::FeeSchedule,
    plan::{compute_plan_metrics, PlanInputs, PlanMetrics},
    referral::{compute_referral_projection, AffiliateProgramInputs, ReferralProjection},
    roi::{break_even_referrals, compute_roi, RoiProjection, SubscriptionTier, TierPricing},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Fully resolved inputs for one evaluation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Inputs {
    pub fees: FeeSchedule,
    /// Recurring monthly plan
    pub monthly: PlanInputs,
    /// Annual plan charged once
    pub annual: PlanInputs,
    pub affiliate: AffiliateProgramInputs,
    /// Selected tier of the referral-tracking tool
    pub tier: SubscriptionTier,
    /// Monthly price table for the tiers
    pub tier_pricing: TierPricing,
}

impl Inputs {
    /// Monthly price of the selected tier
    #[must_use]
    pub const fn tier_monthly_price(&self) -> f64 {
        self.tier_pricing.monthly_price(self.tier)
    }
}

/// ROI of the tracking tool together with its break-even point
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ToolRoi {
    pub tier: SubscriptionTier,
    pub tier_monthly_price: f64,
    #[serde(flatten)]
    pub projection: RoiProjection,
    /// Annual referrals needed to cover the tool cost
    pub break_even_referrals: f64,
}

/// Everything derived from one [`Inputs`] record
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub monthly: PlanMetrics,
    pub annual: PlanMetrics,
    pub referrals: ReferralProjection,
    pub roi: ToolRoi,
}

/// Plan that earns more profit per user
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanChoice {
    Monthly,
    Annual,
    Tie,
}

impl fmt::Display for PlanChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Annual => write!(f, "annual"),
            Self::Tie => write!(f, "tie"),
        }
    }
}

/// Side-by-side differences between the annual and monthly plans
///
/// Each delta is `annual - monthly`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PlanComparison {
    pub gross_clv_delta: f64,
    pub net_revenue_delta: f64,
    pub cac_delta: f64,
    pub profit_delta: f64,
    pub more_profitable: PlanChoice,
}

/// Compare the annual plan against the monthly plan
#[must_use]
pub fn compare_plans(monthly: &PlanMetrics, annual: &PlanMetrics) -> PlanComparison {
    let profit_delta = annual.profit - monthly.profit;
    let more_profitable = if profit_delta > 0.0 {
        PlanChoice::Annual
    } else if profit_delta < 0.0 {
        PlanChoice::Monthly
    } else {
        PlanChoice::Tie
    };

    PlanComparison {
        gross_clv_delta: annual.gross_clv - monthly.gross_clv,
        net_revenue_delta: annual.net_revenue - monthly.net_revenue,
        cac_delta: annual.cac - monthly.cac,
        profit_delta,
        more_profitable,
    }
}

/// Evaluate every metric for `inputs`
///
/// # Examples
/// ```
/// use referral_calc_sdk::{evaluate, AffiliateProgramInputs, FeeSchedule, Inputs, PlanInputs};
/// use referral_calc_sdk::roi::{SubscriptionTier, TierPricing};
///
/// let inputs = Inputs {
///     fees: FeeSchedule::from_percentages(&[1.5, 5.4], 0.20),
///     monthly: PlanInputs::recurring(12.99, 30.0, 3),
///     annual: PlanInputs::one_time(129.99, 30.0),
///     affiliate: AffiliateProgramInputs {
///         active_subscribers: 500.0,
///         active_affiliates: 10.0,
///         avg_monthly_referrals_per_affiliate: 2.0,
///         avg_annual_referrals_per_affiliate: 24.0,
///     },
///     tier: SubscriptionTier::Starter,
///     tier_pricing: TierPricing::default(),
/// };
///
/// let report = evaluate(&inputs);
/// assert!((report.referrals.estimated_annual_revenue - 20_275.2).abs() < 1e-6);
/// assert!((report.roi.projection.annual_tool_cost - 561.6).abs() < 1e-9);
/// ```
#[must_use]
pub fn evaluate(inputs: &Inputs) -> Report {
    let monthly = compute_plan_metrics(&inputs.fees, &inputs.monthly);
    let annual = compute_plan_metrics(&inputs.fees, &inputs.annual);
    debug!(
        monthly_profit = monthly.profit,
        annual_profit = annual.profit,
        "Computed plan metrics"
    );

    let referrals =
        compute_referral_projection(&inputs.affiliate, monthly.gross_clv, inputs.annual.price);

    let tier_monthly_price = inputs.tier_monthly_price();
    let projection = compute_roi(referrals.estimated_annual_revenue, tier_monthly_price);
    debug!(
        tier = %inputs.tier,
        estimated_annual_revenue = referrals.estimated_annual_revenue,
        roi_percent = projection.roi_percent,
        "Computed referral ROI"
    );

    Report {
        monthly,
        annual,
        referrals,
        roi: ToolRoi {
            tier: inputs.tier,
            tier_monthly_price,
            projection,
            break_even_referrals: break_even_referrals(
                projection.annual_tool_cost,
                referrals.avg_value_per_referred_user,
            ),
        },
    }
}

impl Report {
    /// Compare the two plans in this report
    #[must_use]
    pub fn plan_comparison(&self) -> PlanComparison {
        compare_plans(&self.monthly, &self.annual)
    }
}
