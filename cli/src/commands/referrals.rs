//! Referrals command implementation

use crate::{
    commands::OutputFormat,
    config::CliConfig,
    utils::formatting::{format_json, format_referrals_human},
};
use anyhow::Result;
use referral_calc_sdk::{compute_plan_metrics, compute_referral_projection, Inputs};
use tracing::info;

/// Execute the referrals command: projected affiliate referral revenue
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn execute(inputs: &Inputs, output_format: &OutputFormat, config: &CliConfig) -> Result<String> {
    info!(
        "Projecting referrals for {} affiliates",
        inputs.affiliate.active_affiliates
    );

    let monthly = compute_plan_metrics(&inputs.fees, &inputs.monthly);
    let projection =
        compute_referral_projection(&inputs.affiliate, monthly.gross_clv, inputs.annual.price);

    match output_format {
        OutputFormat::Human => Ok(format_referrals_human(&projection, config)),
        OutputFormat::Json => format_json(&projection),
    }
}
