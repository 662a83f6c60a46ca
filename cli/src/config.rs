//! Configuration management for the Referral Calc CLI
//!
//! Output format, settings location and currency presentation are read from
//! environment variables with sensible defaults; command-line flags override
//! them.

use std::{env, path::PathBuf};

/// Environment variable selecting the default output format
pub const OUTPUT_ENV: &str = "REFERRAL_CALC_OUTPUT";
/// Environment variable pointing at the saved-defaults file
pub const SETTINGS_ENV: &str = "REFERRAL_CALC_SETTINGS";
/// Environment variable holding the currency symbol
pub const CURRENCY_ENV: &str = "REFERRAL_CALC_CURRENCY";
/// Environment variable holding the number of decimals shown
pub const DECIMALS_ENV: &str = "REFERRAL_CALC_DECIMALS";

/// Centralized configuration for the Referral Calc CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Default output format for CLI commands
    pub default_output_format: String,

    /// Location of the saved-defaults file
    pub settings_path: PathBuf,

    /// Symbol prefixed to currency amounts
    pub currency_symbol: String,

    /// Decimal places for currency and percentages
    pub decimal_places: usize,
}

impl CliConfig {
    /// Create a new configuration instance with values from environment variables
    /// or sensible defaults if not set
    #[must_use]
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            default_output_format: lookup(OUTPUT_ENV).unwrap_or_else(|| "human".to_string()),

            settings_path: lookup(SETTINGS_ENV)
                .map_or_else(default_settings_path, PathBuf::from),

            currency_symbol: lookup(CURRENCY_ENV).unwrap_or_else(|| "£".to_string()),

            decimal_places: lookup(DECIMALS_ENV)
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        }
    }

    /// Format a currency amount, e.g. `£12.99` or `-£3.90`
    #[must_use]
    pub fn format_currency(&self, amount: f64) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        format!(
            "{sign}{}{:.*}",
            self.currency_symbol,
            self.decimal_places,
            amount.abs()
        )
    }

    /// Format a percentage value, e.g. `10.92%`
    #[must_use]
    pub fn format_percentage(&self, percentage: f64) -> String {
        format!("{:.*}%", self.decimal_places, percentage)
    }

    /// Format a count that may be fractional, e.g. `240` or `2.50`
    #[must_use]
    pub fn format_count(&self, count: f64) -> String {
        if count.fract() == 0.0 {
            format!("{count:.0}")
        } else {
            format!("{:.*}", self.decimal_places, count)
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// `<config dir>/referral-calc/defaults.json`, or a file in the working
/// directory when the platform has no config dir
#[must_use]
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir().map_or_else(
        || PathBuf::from("referral-calc-defaults.json"),
        |dir| dir.join("referral-calc").join("defaults.json"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_with(&[]);

        assert_eq!(config.default_output_format, "human");
        assert_eq!(config.settings_path, default_settings_path());
        assert_eq!(config.currency_symbol, "£");
        assert_eq!(config.decimal_places, 2);
    }

    #[test]
    fn test_config_overrides() {
        let config = config_with(&[
            (OUTPUT_ENV, "json"),
            (SETTINGS_ENV, "/tmp/calc.json"),
            (CURRENCY_ENV, "$"),
            (DECIMALS_ENV, "3"),
        ]);

        assert_eq!(config.default_output_format, "json");
        assert_eq!(config.settings_path, PathBuf::from("/tmp/calc.json"));
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.decimal_places, 3);
    }

    #[test]
    fn test_invalid_decimals_fall_back() {
        let config = config_with(&[(DECIMALS_ENV, "many")]);
        assert_eq!(config.decimal_places, 2);
    }

    #[test]
    fn test_currency_formatting() {
        let config = config_with(&[]);

        assert_eq!(config.format_currency(12.99), "£12.99");
        assert_eq!(config.format_currency(3.897), "£3.90");
        assert_eq!(config.format_currency(-0.6), "-£0.60");
        assert_eq!(config.format_currency(20_275.2), "£20275.20");
    }

    #[test]
    fn test_percentage_formatting() {
        let config = config_with(&[]);

        assert_eq!(config.format_percentage(10.921_5), "10.92%");
        assert_eq!(config.format_percentage(0.0), "0.00%");
    }

    #[test]
    fn test_count_formatting() {
        let config = config_with(&[]);

        assert_eq!(config.format_count(240.0), "240");
        assert_eq!(config.format_count(2.5), "2.50");
    }

    #[test]
    fn test_default_settings_path_file_name() {
        let path = default_settings_path();
        assert!(path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(".json")));
    }
}
