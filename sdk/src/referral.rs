//! Affiliate program referral projection
//!
//! Projects the revenue an affiliate program brings in. Each referred user
//! is valued at the unweighted mean of the monthly plan's lifetime value and
//! the annual plan's price; the actual plan mix among referred users is not
//! tracked.

use crate::utils::percent_of;
use serde::{Deserialize, Serialize};

/// Size and activity of an affiliate program
///
/// Counts are `f64` because they are often averages; no bounds are enforced.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct AffiliateProgramInputs {
    /// Paying subscribers today
    pub active_subscribers: f64,
    /// Affiliates actively referring
    pub active_affiliates: f64,
    /// Average referrals per affiliate per month
    pub avg_monthly_referrals_per_affiliate: f64,
    /// Average referrals per affiliate per year
    pub avg_annual_referrals_per_affiliate: f64,
}

/// Referral volume and revenue projected from an affiliate program
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ReferralProjection {
    pub total_monthly_referrals: f64,
    pub total_annual_referrals: f64,
    /// Blended value of one referred user
    pub avg_value_per_referred_user: f64,
    pub estimated_annual_revenue: f64,
    /// Annual referrals relative to the current subscriber base, `0` with no subscribers
    pub referred_share_of_subscribers_pct: f64,
}

/// Unweighted blend of the monthly plan's lifetime value and the annual price
#[must_use]
pub fn avg_value_per_referred_user(monthly_gross_clv: f64, annual_price: f64) -> f64 {
    (monthly_gross_clv + annual_price) / 2.0
}

/// Project referral volume and the revenue it brings in
///
/// # Examples
/// ```
/// use referral_calc_sdk::{compute_referral_projection, AffiliateProgramInputs};
///
/// let program = AffiliateProgramInputs {
///     active_subscribers: 500.0,
///     active_affiliates: 10.0,
///     avg_monthly_referrals_per_affiliate: 2.0,
///     avg_annual_referrals_per_affiliate: 24.0,
/// };
/// let projection = compute_referral_projection(&program, 38.97, 129.99);
///
/// assert!((projection.total_annual_referrals - 240.0).abs() < 1e-9);
/// assert!((projection.estimated_annual_revenue - 20_275.2).abs() < 1e-6);
/// ```
#[must_use]
pub fn compute_referral_projection(
    program: &AffiliateProgramInputs,
    monthly_gross_clv: f64,
    annual_price: f64,
) -> ReferralProjection {
    let total_monthly_referrals =
        program.active_affiliates * program.avg_monthly_referrals_per_affiliate;
    let total_annual_referrals =
        program.active_affiliates * program.avg_annual_referrals_per_affiliate;
    let avg_value = avg_value_per_referred_user(monthly_gross_clv, annual_price);

    ReferralProjection {
        total_monthly_referrals,
        total_annual_referrals,
        avg_value_per_referred_user: avg_value,
        estimated_annual_revenue: total_annual_referrals * avg_value,
        referred_share_of_subscribers_pct: percent_of(
            total_annual_referrals,
            program.active_subscribers,
        ),
    }
}
