//! Integration tests for the reference pricing scenarios
//!
//! This test suite walks the published default inputs through the whole
//! engine:
//! - Monthly plan with three months of retention
//! - Annual plan charged once
//! - Affiliate projection built on both plans
//! - ROI of the entry tracking tier

use referral_calc_sdk::{
    compute_plan_metrics, compute_referral_projection, compute_roi, evaluate,
    utils::round_cents, AffiliateProgramInputs, FeeSchedule, Inputs, PlanChoice, PlanInputs,
    SubscriptionTier, TierPricing,
};

/// Test fixture with the default fee stack and plans
struct ScenarioFixture {
    fees: FeeSchedule,
    monthly: PlanInputs,
    annual: PlanInputs,
    affiliate: AffiliateProgramInputs,
}

impl ScenarioFixture {
    fn new() -> Self {
        Self {
            fees: FeeSchedule::new(0.069, 0.20),
            monthly: PlanInputs::recurring(12.99, 30.0, 3),
            annual: PlanInputs::one_time(129.99, 30.0),
            affiliate: AffiliateProgramInputs {
                active_subscribers: 500.0,
                active_affiliates: 10.0,
                avg_monthly_referrals_per_affiliate: 2.0,
                avg_annual_referrals_per_affiliate: 24.0,
            },
        }
    }

    fn inputs(&self, tier: SubscriptionTier) -> Inputs {
        Inputs {
            fees: self.fees,
            monthly: self.monthly,
            annual: self.annual,
            affiliate: self.affiliate,
            tier,
            tier_pricing: TierPricing::default(),
        }
    }
}

#[test]
fn test_monthly_plan_scenario() {
    let fixture = ScenarioFixture::new();
    let metrics = compute_plan_metrics(&fixture.fees, &fixture.monthly);

    assert!((round_cents(metrics.gross_clv) - 38.97).abs() < 1e-9);
    assert!((round_cents(metrics.total_fees) - 3.29).abs() < 1e-9);
    assert!((round_cents(metrics.net_revenue) - 35.68).abs() < 1e-9);
    assert!((round_cents(metrics.cac) - 3.90).abs() < 1e-9);
    assert!((round_cents(metrics.profit) - 31.78).abs() < 1e-9);
}

#[test]
fn test_annual_plan_scenario() {
    let fixture = ScenarioFixture::new();
    let metrics = compute_plan_metrics(&fixture.fees, &fixture.annual);

    assert!((round_cents(metrics.gross_clv) - 129.99).abs() < 1e-9);
    assert!((round_cents(metrics.total_fees) - 9.17).abs() < 1e-9);
    assert!((round_cents(metrics.net_revenue) - 120.82).abs() < 1e-9);
    assert!((round_cents(metrics.cac) - 39.00).abs() < 1e-9);
    assert!((round_cents(metrics.profit) - 81.82).abs() < 1e-9);
}

#[test]
fn test_affiliate_projection_scenario() {
    let fixture = ScenarioFixture::new();
    let projection = compute_referral_projection(&fixture.affiliate, 38.97, 129.99);

    assert!((projection.total_annual_referrals - 240.0).abs() < 1e-9);
    assert!((round_cents(projection.avg_value_per_referred_user) - 84.48).abs() < 1e-9);
    assert!((round_cents(projection.estimated_annual_revenue) - 20_275.20).abs() < 1e-9);
}

#[test]
fn test_roi_scenario() {
    let roi = compute_roi(20_275.20, 46.80);

    assert!((round_cents(roi.annual_tool_cost) - 561.60).abs() < 1e-9);
    assert!((round_cents(roi.net_pnl_impact) - 19_713.60).abs() < 1e-9);
    assert!((round_cents(roi.roi_percent) - 3_610.26).abs() < 1e-9);
}

#[test]
fn test_fee_components_match_combined_rate() {
    // Processor 1.5% + platform 5.4% is the same stack as a flat 6.9%
    let fixture = ScenarioFixture::new();
    let stacked = FeeSchedule::from_percentages(&[1.5, 5.4], 0.20);

    let from_stack = compute_plan_metrics(&stacked, &fixture.monthly);
    let from_rate = compute_plan_metrics(&fixture.fees, &fixture.monthly);
    assert!((from_stack.net_revenue - from_rate.net_revenue).abs() < 1e-9);
}

#[test]
fn test_full_evaluation_per_tier() {
    let fixture = ScenarioFixture::new();

    let mut previous_cost = 0.0;
    for tier in SubscriptionTier::ALL {
        let report = evaluate(&fixture.inputs(tier));

        assert_eq!(report.roi.tier, tier);
        assert!((round_cents(report.referrals.estimated_annual_revenue) - 20_275.20).abs() < 1e-9);
        assert!(report.roi.projection.annual_tool_cost > previous_cost);
        previous_cost = report.roi.projection.annual_tool_cost;
    }
}

#[test]
fn test_annual_plan_is_more_profitable_by_default() {
    let fixture = ScenarioFixture::new();
    let report = evaluate(&fixture.inputs(SubscriptionTier::Starter));

    assert_eq!(report.plan_comparison().more_profitable, PlanChoice::Annual);
}
