//! Output formatting utilities for the Referral Calc CLI

use crate::{config::CliConfig, settings::SavedDefaults};
use anyhow::{anyhow, Result};
use referral_calc_sdk::{
    PlanComparison, PlanMetrics, ReferralProjection, Report, SubscriptionTier, TierPricing,
    ToolRoi,
};
use serde::Serialize;
use std::path::Path;

const LABEL_WIDTH: usize = 30;

fn row(label: &str, value: &str) -> String {
    format!("{label:<LABEL_WIDTH$} {value:>14}")
}

fn heading(title: &str) -> String {
    format!("{title}\n{}", "-".repeat(LABEL_WIDTH + 15))
}

/// Format one plan's metrics for human-readable output
#[must_use]
pub fn format_plan_human(title: &str, metrics: &PlanMetrics, config: &CliConfig) -> String {
    [
        heading(title),
        row("Gross CLV", &config.format_currency(metrics.gross_clv)),
        row("Total fees", &config.format_currency(metrics.total_fees)),
        row("Net revenue after fees", &config.format_currency(metrics.net_revenue)),
        row("CAC", &config.format_currency(metrics.cac)),
        row(
            "CAC as % of net revenue",
            &config.format_percentage(metrics.cac_pct_of_net_revenue),
        ),
        row(
            "CAC as % of gross CLV",
            &config.format_percentage(metrics.cac_pct_of_gross_clv),
        ),
        row("Net profit per user", &config.format_currency(metrics.profit)),
    ]
    .join("\n")
}

/// Format the annual-vs-monthly comparison for human-readable output
#[must_use]
pub fn format_comparison_human(comparison: &PlanComparison, config: &CliConfig) -> String {
    [
        heading("Annual vs monthly"),
        row(
            "Gross CLV difference",
            &config.format_currency(comparison.gross_clv_delta),
        ),
        row(
            "Net revenue difference",
            &config.format_currency(comparison.net_revenue_delta),
        ),
        row("CAC difference", &config.format_currency(comparison.cac_delta)),
        row(
            "Profit difference",
            &config.format_currency(comparison.profit_delta),
        ),
        row(
            "More profitable per user",
            &comparison.more_profitable.to_string(),
        ),
    ]
    .join("\n")
}

/// Format the referral projection for human-readable output
#[must_use]
pub fn format_referrals_human(projection: &ReferralProjection, config: &CliConfig) -> String {
    [
        heading("Affiliate referrals"),
        row(
            "Referrals per month",
            &config.format_count(projection.total_monthly_referrals),
        ),
        row(
            "Referrals per year",
            &config.format_count(projection.total_annual_referrals),
        ),
        row(
            "Value per referred user",
            &config.format_currency(projection.avg_value_per_referred_user),
        ),
        row(
            "Estimated annual revenue",
            &config.format_currency(projection.estimated_annual_revenue),
        ),
        row(
            "Referrals vs subscriber base",
            &config.format_percentage(projection.referred_share_of_subscribers_pct),
        ),
    ]
    .join("\n")
}

/// Format the tracking tool ROI for human-readable output
#[must_use]
pub fn format_roi_human(roi: &ToolRoi, config: &CliConfig) -> String {
    [
        heading(&format!("Tracking tool ROI ({} tier)", roi.tier)),
        row("Monthly price", &config.format_currency(roi.tier_monthly_price)),
        row(
            "Annual tool cost",
            &config.format_currency(roi.projection.annual_tool_cost),
        ),
        row("ROI", &config.format_percentage(roi.projection.roi_percent)),
        row(
            "Net P&L impact",
            &config.format_currency(roi.projection.net_pnl_impact),
        ),
        row(
            "Break-even referrals per year",
            &config.format_count(roi.break_even_referrals.ceil()),
        ),
    ]
    .join("\n")
}

/// Format a full report for human-readable output
#[must_use]
pub fn format_report_human(report: &Report, config: &CliConfig) -> String {
    [
        format_plan_human("Monthly plan", &report.monthly, config),
        format_plan_human("Annual plan", &report.annual, config),
        format_referrals_human(&report.referrals, config),
        format_roi_human(&report.roi, config),
    ]
    .join("\n\n")
}

/// Format the tier price table for human-readable output
#[must_use]
pub fn format_tiers_human(
    pricing: &TierPricing,
    selected: SubscriptionTier,
    config: &CliConfig,
) -> String {
    let mut lines = vec![
        format!("{:<12} {:>14} {:>14} {:<8}", "Tier", "Monthly", "Annual", "Selected"),
        "-".repeat(51),
    ];
    for (tier, monthly_price) in pricing.iter() {
        lines.push(format!(
            "{:<12} {:>14} {:>14} {:<8}",
            tier.as_str(),
            config.format_currency(monthly_price),
            config.format_currency(referral_calc_sdk::annual_tool_cost(monthly_price)),
            if tier == selected { "Yes" } else { "" }
        ));
    }
    lines.join("\n")
}

/// Format saved defaults for human-readable output
#[must_use]
pub fn format_defaults_human(settings: &SavedDefaults, path: &Path, config: &CliConfig) -> String {
    [
        format!("Saved defaults: {}", path.display()),
        format!("Schema version: {}", settings.version),
        String::new(),
        heading("Fees"),
        row(
            "Processor fee",
            &config.format_percentage(settings.processor_fee_pct),
        ),
        row("Fixed fee per charge", &config.format_currency(settings.fixed_fee)),
        row(
            "Platform fee",
            &config.format_percentage(settings.platform_fee_pct),
        ),
        String::new(),
        heading("Plans"),
        row("Monthly price", &config.format_currency(settings.monthly_price)),
        row(
            "Monthly commission",
            &config.format_percentage(settings.monthly_commission_pct),
        ),
        row("Retention (months)", &settings.retention_months.to_string()),
        row("Annual price", &config.format_currency(settings.annual_price)),
        row(
            "Annual commission",
            &config.format_percentage(settings.annual_commission_pct),
        ),
        String::new(),
        heading("Affiliate program"),
        row(
            "Active subscribers",
            &config.format_count(settings.active_subscribers),
        ),
        row(
            "Active affiliates",
            &config.format_count(settings.active_affiliates),
        ),
        row(
            "Monthly referrals / affiliate",
            &config.format_count(settings.monthly_referrals),
        ),
        row(
            "Annual referrals / affiliate",
            &config.format_count(settings.annual_referrals),
        ),
        row("Tracking tier", settings.tier.as_str()),
        String::new(),
        heading("Tier prices (monthly)"),
        row(
            SubscriptionTier::Starter.as_str(),
            &config.format_currency(settings.starter_price),
        ),
        row(
            SubscriptionTier::Growth.as_str(),
            &config.format_currency(settings.growth_price),
        ),
        row(
            SubscriptionTier::Enterprise.as_str(),
            &config.format_currency(settings.enterprise_price),
        ),
    ]
    .join("\n")
}

/// Wrap `data` in the success envelope used for JSON output
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn format_json<T: Serialize>(data: &T) -> Result<String> {
    let json_output = serde_json::json!({
        "success": true,
        "data": data
    });
    serde_json::to_string_pretty(&json_output)
        .map_err(|e| anyhow!("Failed to serialize output to JSON: {e}"))
}

/// Failure envelope used for JSON output
#[must_use]
pub fn format_json_error(message: &str) -> String {
    let json_output = serde_json::json!({
        "success": false,
        "error": message
    });
    // A map of two strings always serializes
    serde_json::to_string_pretty(&json_output).unwrap_or_default()
}
