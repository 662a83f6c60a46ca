//! Return on the referral-tracking subscription itself
//!
//! The tracking tool is billed monthly at one of a fixed set of tiers. Its
//! ROI compares a year of that bill against the revenue the referral
//! program is projected to bring in.

use crate::{
    error::{CalcError, Result},
    utils::{percent_of, safe_div},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Billing periods per year for a monthly-billed tool
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Published tier of the referral-tracking subscription
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionTier {
    /// Entry tier
    #[default]
    Starter,
    /// Mid tier
    Growth,
    /// Top tier
    Enterprise,
}

impl SubscriptionTier {
    /// All tiers in ascending price order
    pub const ALL: [Self; 3] = [Self::Starter, Self::Growth, Self::Enterprise];

    /// Published monthly price of this tier
    #[must_use]
    pub const fn default_monthly_price(self) -> f64 {
        match self {
            Self::Starter => 46.80,
            Self::Growth => 93.60,
            Self::Enterprise => 140.40,
        }
    }

    /// Lowercase identifier used on the command line and in saved settings
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Growth => "growth",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "growth" => Ok(Self::Growth),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(CalcError::UnknownTier(s.to_string())),
        }
    }
}

/// Monthly price table for the subscription tiers
///
/// Prices are configuration, not derived; the defaults are the published
/// list prices and any tier may be overridden.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TierPricing {
    pub starter: f64,
    pub growth: f64,
    pub enterprise: f64,
}

impl Default for TierPricing {
    fn default() -> Self {
        Self {
            starter: SubscriptionTier::Starter.default_monthly_price(),
            growth: SubscriptionTier::Growth.default_monthly_price(),
            enterprise: SubscriptionTier::Enterprise.default_monthly_price(),
        }
    }
}

impl TierPricing {
    /// Monthly price of `tier`
    #[must_use]
    pub const fn monthly_price(&self, tier: SubscriptionTier) -> f64 {
        match tier {
            SubscriptionTier::Starter => self.starter,
            SubscriptionTier::Growth => self.growth,
            SubscriptionTier::Enterprise => self.enterprise,
        }
    }

    /// Return a copy with `tier` priced at `monthly_price`
    #[must_use]
    pub fn with_price(mut self, tier: SubscriptionTier, monthly_price: f64) -> Self {
        match tier {
            SubscriptionTier::Starter => self.starter = monthly_price,
            SubscriptionTier::Growth => self.growth = monthly_price,
            SubscriptionTier::Enterprise => self.enterprise = monthly_price,
        }
        self
    }

    /// Iterate `(tier, monthly_price)` in ascending tier order
    pub fn iter(&self) -> impl Iterator<Item = (SubscriptionTier, f64)> + '_ {
        SubscriptionTier::ALL
            .into_iter()
            .map(move |tier| (tier, self.monthly_price(tier)))
    }
}

/// Cost and return of the tracking subscription over one year
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RoiProjection {
    pub annual_tool_cost: f64,
    /// Projected revenue as a percentage of the tool cost, `0` for a free tool
    pub roi_percent: f64,
    /// Projected revenue minus the tool cost
    pub net_pnl_impact: f64,
}

/// Annual cost of a tool billed monthly
#[must_use]
pub fn annual_tool_cost(monthly_price: f64) -> f64 {
    monthly_price * MONTHS_PER_YEAR
}

/// Compute the ROI of paying `tier_monthly_price` for the tracking tool
///
/// # Examples
/// ```
/// use referral_calc_sdk::compute_roi;
///
/// let roi = compute_roi(20_275.2, 46.80);
/// assert!((roi.annual_tool_cost - 561.6).abs() < 1e-9);
/// assert!((roi.net_pnl_impact - 19_713.6).abs() < 1e-6);
/// ```
#[must_use]
pub fn compute_roi(estimated_annual_revenue: f64, tier_monthly_price: f64) -> RoiProjection {
    let cost = annual_tool_cost(tier_monthly_price);

    RoiProjection {
        annual_tool_cost: cost,
        roi_percent: percent_of(estimated_annual_revenue, cost),
        net_pnl_impact: estimated_annual_revenue - cost,
    }
}

/// Annual referrals needed for the tool to pay for itself
///
/// Reports `0` when a referred user is worth nothing.
#[must_use]
pub fn break_even_referrals(annual_tool_cost: f64, avg_value_per_referred_user: f64) -> f64 {
    safe_div(annual_tool_cost, avg_value_per_referred_user)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_compute_roi() {
        let roi = compute_roi(20_275.2, 46.80);

        assert!((roi.annual_tool_cost - 561.6).abs() < EPSILON);
        assert!((roi.roi_percent - 20_275.2 / 561.6 * 100.0).abs() < EPSILON);
        assert!((roi.roi_percent - 3_610.26).abs() < 0.01);
        assert!((roi.net_pnl_impact - 19_713.6).abs() < EPSILON);
    }

    #[test]
    fn test_free_tool_reports_zero_roi() {
        let roi = compute_roi(1_000.0, 0.0);
        assert!(roi.annual_tool_cost.abs() < EPSILON);
        assert!(roi.roi_percent.abs() < EPSILON);
        assert!((roi.net_pnl_impact - 1_000.0).abs() < EPSILON);
    }

    #[test]
    fn test_loss_making_tool() {
        let roi = compute_roi(100.0, 46.80);
        assert!(roi.net_pnl_impact < 0.0);
        assert!(roi.roi_percent < 100.0);
    }

    #[test]
    fn test_break_even_referrals() {
        assert!((break_even_referrals(561.6, 84.48) - 561.6 / 84.48).abs() < EPSILON);
        assert!(break_even_referrals(561.6, 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_tier_prices() {
        let pricing = TierPricing::default();
        assert!((pricing.monthly_price(SubscriptionTier::Starter) - 46.80).abs() < EPSILON);
        assert!((pricing.monthly_price(SubscriptionTier::Growth) - 93.60).abs() < EPSILON);
        assert!((pricing.monthly_price(SubscriptionTier::Enterprise) - 140.40).abs() < EPSILON);

        let prices: Vec<f64> = pricing.iter().map(|(_, price)| price).collect();
        assert!(prices.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_tier_price_override() {
        let pricing = TierPricing::default().with_price(SubscriptionTier::Growth, 79.0);
        assert!((pricing.monthly_price(SubscriptionTier::Growth) - 79.0).abs() < EPSILON);
        assert!((pricing.monthly_price(SubscriptionTier::Starter) - 46.80).abs() < EPSILON);
    }

    #[test]
    fn test_tier_parsing() {
        assert_eq!("starter".parse(), Ok(SubscriptionTier::Starter));
        assert_eq!(" Growth ".parse(), Ok(SubscriptionTier::Growth));
        assert_eq!("ENTERPRISE".parse(), Ok(SubscriptionTier::Enterprise));
        assert_eq!(
            "platinum".parse::<SubscriptionTier>(),
            Err(CalcError::UnknownTier("platinum".to_string()))
        );

        for tier in SubscriptionTier::ALL {
            assert_eq!(tier.to_string().parse(), Ok(tier));
        }
    }

    #[test]
    fn test_tier_serde_names() {
        let json = serde_json::to_string(&SubscriptionTier::Enterprise).unwrap();
        assert_eq!(json, "\"enterprise\"");
        let tier: SubscriptionTier = serde_json::from_str("\"growth\"").unwrap();
        assert_eq!(tier, SubscriptionTier::Growth);
    }
}
