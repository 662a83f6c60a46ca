//! Referral Calc SDK - formula engine for subscription referral economics
//!
//! This crate turns pricing, fee, commission and retention inputs for a
//! monthly and an annual subscription plan into:
//!
//! - Customer lifetime value, fees and net revenue per plan
//! - Customer acquisition cost (the referral commission) and profit per user
//! - Referral volume and revenue projected from an affiliate program
//! - ROI of the referral-tracking subscription itself
//!
//! Every function is pure: no I/O, no shared state, no errors. Ratios whose
//! denominator is zero are reported as `0`.
//!
//! # Example Usage
//!
//! ```
//! use referral_calc_sdk::{compute_plan_metrics, compute_roi, FeeSchedule, PlanInputs};
//!
//! // 1.5% processor fee + 5.4% platform fee, 0.20 per charge
//! let fees = FeeSchedule::from_percentages(&[1.5, 5.4], 0.20);
//!
//! let monthly = compute_plan_metrics(&fees, &PlanInputs::recurring(12.99, 30.0, 3));
//! let annual = compute_plan_metrics(&fees, &PlanInputs::one_time(129.99, 30.0));
//! assert!(annual.profit > monthly.profit);
//!
//! let roi = compute_roi(20_275.2, 46.80);
//! assert!(roi.net_pnl_impact > 0.0);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod calculator;
pub mod error;
pub mod fees;
pub mod plan;
pub mod referral;
pub mod roi;
pub mod utils;
pub mod validation;

// Re-export commonly used items
pub use calculator::{
    compare_plans, evaluate, Inputs, PlanChoice, PlanComparison, Report, ToolRoi,
};
pub use error::{CalcError, Result};
pub use fees::{combined_fee_rate, FeeSchedule};
pub use plan::{acquisition_cost, compute_plan_metrics, Billing, PlanInputs, PlanMetrics};
pub use referral::{
    avg_value_per_referred_user, compute_referral_projection, AffiliateProgramInputs,
    ReferralProjection,
};
pub use roi::{
    annual_tool_cost, break_even_referrals, compute_roi, RoiProjection, SubscriptionTier,
    TierPricing,
};
pub use validation::validate_inputs;
