//! Evaluate command implementation

use crate::{
    commands::OutputFormat,
    config::CliConfig,
    utils::formatting::{format_json, format_report_human},
};
use anyhow::Result;
use referral_calc_sdk::{evaluate, Inputs};
use tracing::info;

/// Execute the evaluate command: every metric for the resolved inputs
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn execute(inputs: &Inputs, output_format: &OutputFormat, config: &CliConfig) -> Result<String> {
    info!("Evaluating all metrics for the {} tier", inputs.tier);

    let report = evaluate(inputs);

    match output_format {
        OutputFormat::Human => Ok(format_report_human(&report, config)),
        OutputFormat::Json => format_json(&report),
    }
}
