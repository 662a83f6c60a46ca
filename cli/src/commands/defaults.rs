//! Saved defaults command implementations

use crate::{
    commands::OutputFormat,
    config::CliConfig,
    settings::{InputOverrides, SavedDefaults},
    utils::formatting::{format_defaults_human, format_json},
};
use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Show the saved defaults, or the built-in ones when nothing is saved
///
/// # Errors
/// Returns error if the settings file cannot be read or parsed
pub fn execute_show(path: &Path, output_format: &OutputFormat, config: &CliConfig) -> Result<String> {
    let settings = SavedDefaults::load(path)
        .with_context(|| format!("Failed to load defaults from {}", path.display()))?;

    match output_format {
        OutputFormat::Human => Ok(format_defaults_human(&settings, path, config)),
        OutputFormat::Json => format_json(&settings),
    }
}

/// Apply overrides to the current defaults and save the result
///
/// # Errors
/// Returns error if the settings file cannot be read, parsed or written
pub fn execute_save(
    path: &Path,
    overrides: &InputOverrides,
    output_format: &OutputFormat,
    config: &CliConfig,
) -> Result<String> {
    let current = SavedDefaults::load(path)
        .with_context(|| format!("Failed to load defaults from {}", path.display()))?;
    let updated = current.with_overrides(overrides);

    updated
        .save(path)
        .with_context(|| format!("Failed to save defaults to {}", path.display()))?;
    info!("Defaults updated");

    let saved = SavedDefaults::load(path)?;
    match output_format {
        OutputFormat::Human => Ok(format!(
            "Defaults saved.\n\n{}",
            format_defaults_human(&saved, path, config)
        )),
        OutputFormat::Json => format_json(&saved),
    }
}

/// Delete the saved defaults so built-in defaults apply again
///
/// # Errors
/// Returns error if the settings file exists but cannot be removed
pub fn execute_reset(path: &Path, output_format: &OutputFormat) -> Result<String> {
    let removed = SavedDefaults::reset(path)
        .with_context(|| format!("Failed to remove defaults at {}", path.display()))?;

    match output_format {
        OutputFormat::Human if removed => Ok(format!(
            "Removed saved defaults at {}; built-in defaults apply again.",
            path.display()
        )),
        OutputFormat::Human => Ok(format!("No saved defaults at {}.", path.display())),
        OutputFormat::Json => format_json(&json!({
            "path": path.display().to_string(),
            "removed": removed,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use referral_calc_sdk::SubscriptionTier;
    use tempfile::TempDir;

    fn config() -> CliConfig {
        CliConfig::from_lookup(|_| None)
    }

    #[test]
    fn test_save_then_show() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("defaults.json");

        let overrides = InputOverrides {
            monthly_price: Some(14.99),
            tier: Some(SubscriptionTier::Growth),
            ..InputOverrides::default()
        };
        let saved = execute_save(&path, &overrides, &OutputFormat::Human, &config()).unwrap();
        assert!(saved.starts_with("Defaults saved."));

        let shown = execute_show(&path, &OutputFormat::Json, &config()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&shown).unwrap();
        assert_eq!(value["data"]["version"], 1);
        assert_eq!(value["data"]["tier"], "growth");
        assert!((value["data"]["monthly_price"].as_f64().unwrap() - 14.99).abs() < 1e-9);
        assert!((value["data"]["annual_price"].as_f64().unwrap() - 129.99).abs() < 1e-9);
    }

    #[test]
    fn test_save_keeps_earlier_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("defaults.json");

        let first = InputOverrides {
            annual_price: Some(99.0),
            ..InputOverrides::default()
        };
        execute_save(&path, &first, &OutputFormat::Json, &config()).unwrap();

        let second = InputOverrides {
            retention_months: Some(5),
            ..InputOverrides::default()
        };
        execute_save(&path, &second, &OutputFormat::Json, &config()).unwrap();

        let settings = SavedDefaults::load(&path).unwrap();
        assert!((settings.annual_price - 99.0).abs() < 1e-9);
        assert_eq!(settings.retention_months, 5);
    }

    #[test]
    fn test_reset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("defaults.json");

        let output = execute_reset(&path, &OutputFormat::Human).unwrap();
        assert!(output.starts_with("No saved defaults"));

        execute_save(&path, &InputOverrides::default(), &OutputFormat::Json, &config()).unwrap();
        let output = execute_reset(&path, &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["data"]["removed"], true);
        assert!(!path.exists());
    }
}
