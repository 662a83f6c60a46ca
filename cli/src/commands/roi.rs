//! ROI command implementation

use crate::{
    commands::OutputFormat,
    config::CliConfig,
    utils::formatting::{format_json, format_roi_human},
};
use anyhow::Result;
use referral_calc_sdk::{break_even_referrals, compute_roi, evaluate, Inputs, ToolRoi};
use tracing::info;

/// Execute the ROI command for the selected tracking tier
///
/// With `revenue_override` the projected annual revenue is taken as given
/// instead of being derived from the affiliate program.
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn execute(
    inputs: &Inputs,
    revenue_override: Option<f64>,
    output_format: &OutputFormat,
    config: &CliConfig,
) -> Result<String> {
    let report = evaluate(inputs);

    let roi = match revenue_override {
        Some(revenue) => {
            info!("Using supplied annual revenue of {revenue}");
            let projection = compute_roi(revenue, report.roi.tier_monthly_price);
            ToolRoi {
                projection,
                break_even_referrals: break_even_referrals(
                    projection.annual_tool_cost,
                    report.referrals.avg_value_per_referred_user,
                ),
                ..report.roi
            }
        }
        None => report.roi,
    };

    match output_format {
        OutputFormat::Human => Ok(format_roi_human(&roi, config)),
        OutputFormat::Json => format_json(&roi),
    }
}
