//! Tiers command implementation

use crate::{
    commands::OutputFormat,
    config::CliConfig,
    utils::formatting::{format_json, format_tiers_human},
};
use anyhow::Result;
use referral_calc_sdk::{annual_tool_cost, SubscriptionTier, TierPricing};
use serde_json::json;

/// Execute the tiers command: published tracking tiers and their prices
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn execute(
    pricing: &TierPricing,
    selected: SubscriptionTier,
    output_format: &OutputFormat,
    config: &CliConfig,
) -> Result<String> {
    match output_format {
        OutputFormat::Human => Ok(format_tiers_human(pricing, selected, config)),
        OutputFormat::Json => {
            let tiers: Vec<serde_json::Value> = pricing
                .iter()
                .map(|(tier, monthly_price)| {
                    json!({
                        "tier": tier,
                        "monthly_price": monthly_price,
                        "annual_price": annual_tool_cost(monthly_price),
                        "selected": tier == selected,
                    })
                })
                .collect();
            format_json(&tiers)
        }
    }
}
