//! Plans command implementation

use crate::{
    commands::OutputFormat,
    config::CliConfig,
    utils::formatting::{format_comparison_human, format_json, format_plan_human},
};
use anyhow::Result;
use referral_calc_sdk::{compare_plans, compute_plan_metrics, Inputs};
use serde_json::json;
use tracing::info;

/// Execute the plans command: monthly and annual metrics side by side
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn execute(inputs: &Inputs, output_format: &OutputFormat, config: &CliConfig) -> Result<String> {
    info!(
        "Comparing monthly ({}) and annual ({}) plans",
        inputs.monthly.billing, inputs.annual.billing
    );

    let monthly = compute_plan_metrics(&inputs.fees, &inputs.monthly);
    let annual = compute_plan_metrics(&inputs.fees, &inputs.annual);
    let comparison = compare_plans(&monthly, &annual);

    match output_format {
        OutputFormat::Human => Ok([
            format_plan_human("Monthly plan", &monthly, config),
            format_plan_human("Annual plan", &annual, config),
            format_comparison_human(&comparison, config),
        ]
        .join("\n\n")),
        OutputFormat::Json => format_json(&json!({
            "monthly": monthly,
            "annual": annual,
            "comparison": comparison,
        })),
    }
}
