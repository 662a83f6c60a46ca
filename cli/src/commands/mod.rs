//! Command implementations for the Referral Calc CLI
//!
//! This module contains the individual command implementations, each in their own file
//! for better organization and maintainability.

pub mod defaults;
pub mod definitions;
pub mod evaluate;
pub mod plans;
pub mod referrals;
pub mod roi;
pub mod tiers;

// Re-export command execution functions for easy access
pub use defaults::{
    execute_reset as execute_defaults_reset, execute_save as execute_defaults_save,
    execute_show as execute_defaults_show,
};
pub use definitions::execute as execute_definitions;
pub use evaluate::execute as execute_evaluate;
pub use plans::execute as execute_plans;
pub use referrals::execute as execute_referrals;
pub use roi::execute as execute_roi;
pub use tiers::execute as execute_tiers;

use crate::settings::{InputOverrides, SavedDefaults};
use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use referral_calc_sdk::{validate_inputs, Inputs};
use std::path::Path;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Parse output format from string
///
/// # Errors
/// Returns error for anything other than `human` or `json`
pub fn parse_output_format(format_str: &str) -> Result<OutputFormat> {
    match format_str.to_lowercase().as_str() {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        _ => Err(anyhow!("Invalid output format: {format_str}")),
    }
}

/// Load saved defaults, apply command-line overrides and resolve the result
///
/// Suspicious values are logged as warnings; they never stop evaluation.
///
/// # Errors
/// Returns error if the settings file exists but cannot be read or parsed
pub fn load_inputs(settings_path: &Path, overrides: &InputOverrides) -> Result<Inputs> {
    let settings = SavedDefaults::load(settings_path)
        .with_context(|| format!("Failed to load defaults from {}", settings_path.display()))?;
    let inputs = settings.with_overrides(overrides).resolve();

    for finding in validate_inputs(&inputs) {
        warn!("{finding}");
    }
    Ok(inputs)
}
