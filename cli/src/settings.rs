//! Saved default inputs
//!
//! The calculator remembers the last inputs a user saved in a small JSON
//! file. The record is flat (one key per input) and versioned. Every field
//! has a fixed default, so a partial file, an unversioned file written by an
//! older release, or no file at all all resolve to a complete set of inputs.
//!
//! Older files used processor/platform specific key names and sometimes
//! stored numbers as strings; both are still accepted on load.

use clap::Args;
use referral_calc_sdk::{
    AffiliateProgramInputs, FeeSchedule, Inputs, PlanInputs, SubscriptionTier, TierPricing,
};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{info, warn};

/// Schema version written by this release
pub const SETTINGS_VERSION: u32 = 1;

/// Version assumed for files written before the record was versioned
pub const LEGACY_VERSION: u32 = 0;

/// Errors raised while reading or writing the saved-defaults file
#[derive(Error, Debug)]
pub enum SettingsError {
    /// File exists but could not be read
    #[error("Failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File could not be written
    #[error("Failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File is not a valid settings record
    #[error("Malformed settings file: {0}")]
    Parse(#[from] serde_json::Error),

    /// File was written by a newer release
    #[error("Settings version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Flat, versioned record of default inputs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SavedDefaults {
    /// Schema version; absent in files that predate versioning
    #[serde(default = "legacy_version")]
    pub version: u32,

    /// Payment processor percentage fee, in percent
    #[serde(alias = "stripe_fee_pct", deserialize_with = "lenient_f64")]
    pub processor_fee_pct: f64,

    /// Payment processor fixed fee per charge
    #[serde(alias = "stripe_fixed_fee", deserialize_with = "lenient_f64")]
    pub fixed_fee: f64,

    /// Hosting platform percentage fee, in percent
    #[serde(alias = "uscreen_fee_pct", deserialize_with = "lenient_f64")]
    pub platform_fee_pct: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub monthly_price: f64,

    #[serde(alias = "monthly_commission", deserialize_with = "lenient_f64")]
    pub monthly_commission_pct: f64,

    #[serde(alias = "monthly_retention", deserialize_with = "lenient_u32")]
    pub retention_months: u32,

    #[serde(deserialize_with = "lenient_f64")]
    pub annual_price: f64,

    #[serde(alias = "annual_commission", deserialize_with = "lenient_f64")]
    pub annual_commission_pct: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub active_subscribers: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub active_affiliates: f64,

    /// Average monthly referrals per affiliate
    #[serde(deserialize_with = "lenient_f64")]
    pub monthly_referrals: f64,

    /// Average annual referrals per affiliate
    #[serde(deserialize_with = "lenient_f64")]
    pub annual_referrals: f64,

    #[serde(deserialize_with = "lenient_tier")]
    pub tier: SubscriptionTier,

    #[serde(deserialize_with = "lenient_f64")]
    pub starter_price: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub growth_price: f64,

    #[serde(deserialize_with = "lenient_f64")]
    pub enterprise_price: f64,
}

const fn legacy_version() -> u32 {
    LEGACY_VERSION
}

impl Default for SavedDefaults {
    fn default() -> Self {
        let pricing = TierPricing::default();
        Self {
            version: SETTINGS_VERSION,
            processor_fee_pct: 1.5,
            fixed_fee: 0.20,
            platform_fee_pct: 5.4,
            monthly_price: 12.99,
            monthly_commission_pct: 30.0,
            retention_months: 3,
            annual_price: 129.99,
            annual_commission_pct: 30.0,
            active_subscribers: 500.0,
            active_affiliates: 10.0,
            monthly_referrals: 2.0,
            annual_referrals: 24.0,
            tier: SubscriptionTier::Starter,
            starter_price: pricing.starter,
            growth_price: pricing.growth,
            enterprise_price: pricing.enterprise,
        }
    }
}

/// Command-line overrides layered on top of the saved defaults
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct InputOverrides {
    /// Payment processor fee in percent (e.g. 1.5)
    #[arg(long, allow_negative_numbers = true)]
    pub processor_fee_pct: Option<f64>,

    /// Payment processor fixed fee per charge
    #[arg(long, allow_negative_numbers = true)]
    pub fixed_fee: Option<f64>,

    /// Hosting platform fee in percent (e.g. 5.4)
    #[arg(long, allow_negative_numbers = true)]
    pub platform_fee_pct: Option<f64>,

    /// Monthly subscription price
    #[arg(long, allow_negative_numbers = true)]
    pub monthly_price: Option<f64>,

    /// Referral commission on the monthly plan in percent
    #[arg(long, allow_negative_numbers = true)]
    pub monthly_commission_pct: Option<f64>,

    /// Average retention of monthly subscribers in months
    #[arg(long)]
    pub retention_months: Option<u32>,

    /// Annual subscription price
    #[arg(long, allow_negative_numbers = true)]
    pub annual_price: Option<f64>,

    /// Referral commission on the annual plan in percent
    #[arg(long, allow_negative_numbers = true)]
    pub annual_commission_pct: Option<f64>,

    /// Paying subscribers today
    #[arg(long, allow_negative_numbers = true)]
    pub active_subscribers: Option<f64>,

    /// Affiliates actively referring
    #[arg(long, allow_negative_numbers = true)]
    pub active_affiliates: Option<f64>,

    /// Average monthly referrals per affiliate
    #[arg(long, allow_negative_numbers = true)]
    pub monthly_referrals: Option<f64>,

    /// Average annual referrals per affiliate
    #[arg(long, allow_negative_numbers = true)]
    pub annual_referrals: Option<f64>,

    /// Referral-tracking tier (starter, growth, enterprise)
    #[arg(long)]
    pub tier: Option<SubscriptionTier>,

    /// Monthly price of the selected tier
    #[arg(long, allow_negative_numbers = true)]
    pub tier_price: Option<f64>,
}

impl SavedDefaults {
    /// Parse a settings record from JSON
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or from a newer release
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        if settings.version > SETTINGS_VERSION {
            return Err(SettingsError::UnsupportedVersion {
                found: settings.version,
                supported: SETTINGS_VERSION,
            });
        }
        Ok(settings)
    }

    /// Load saved defaults, falling back to built-in defaults when the file
    /// does not exist
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No saved defaults at {}, using built-in defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let settings = Self::from_json_str(&json)?;
        info!(
            "Loaded saved defaults from {} (version {})",
            path.display(),
            settings.version
        );
        Ok(settings)
    }

    /// Write the record as the current schema version, creating parent
    /// directories as needed
    ///
    /// # Errors
    /// Returns an error if the file or its directory cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err = |source: io::Error| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let record = Self {
            version: SETTINGS_VERSION,
            ..self.clone()
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(path, json).map_err(write_err)?;

        info!("Saved defaults to {}", path.display());
        Ok(())
    }

    /// Delete the saved-defaults file
    ///
    /// Returns `false` when there was nothing to delete.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed
    pub fn reset(path: &Path) -> Result<bool> {
        match fs::remove_file(path) {
            Ok(()) => {
                info!("Removed saved defaults at {}", path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(SettingsError::Write {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Return a copy with every override that was given applied
    #[must_use]
    pub fn with_overrides(&self, overrides: &InputOverrides) -> Self {
        let mut next = self.clone();

        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = overrides.$field {
                    next.$field = value;
                })*
            };
        }
        apply!(
            processor_fee_pct,
            fixed_fee,
            platform_fee_pct,
            monthly_price,
            monthly_commission_pct,
            retention_months,
            annual_price,
            annual_commission_pct,
            active_subscribers,
            active_affiliates,
            monthly_referrals,
            annual_referrals,
            tier,
        );

        if let Some(price) = overrides.tier_price {
            next.set_tier_price(next.tier, price);
        }
        next
    }

    /// Monthly price table for the tracking tiers
    #[must_use]
    pub const fn tier_pricing(&self) -> TierPricing {
        TierPricing {
            starter: self.starter_price,
            growth: self.growth_price,
            enterprise: self.enterprise_price,
        }
    }

    fn set_tier_price(&mut self, tier: SubscriptionTier, price: f64) {
        match tier {
            SubscriptionTier::Starter => self.starter_price = price,
            SubscriptionTier::Growth => self.growth_price = price,
            SubscriptionTier::Enterprise => self.enterprise_price = price,
        }
    }

    /// Resolve the record into the calculator's complete input set
    #[must_use]
    pub fn resolve(&self) -> Inputs {
        Inputs {
            fees: FeeSchedule::from_percentages(
                &[self.processor_fee_pct, self.platform_fee_pct],
                self.fixed_fee,
            ),
            monthly: PlanInputs::recurring(
                self.monthly_price,
                self.monthly_commission_pct,
                self.retention_months,
            ),
            annual: PlanInputs::one_time(self.annual_price, self.annual_commission_pct),
            affiliate: AffiliateProgramInputs {
                active_subscribers: self.active_subscribers,
                active_affiliates: self.active_affiliates,
                avg_monthly_referrals_per_affiliate: self.monthly_referrals,
                avg_annual_referrals_per_affiliate: self.annual_referrals,
            },
            tier: self.tier,
            tier_pricing: self.tier_pricing(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a number, got '{s}'"))),
    }
}

fn lenient_u32<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_f64(deserializer)?;
    let periods = value.max(0.0).floor();
    if value < 0.0 || value.fract() != 0.0 {
        warn!("Retention {value} is not a whole number of periods, using {periods}");
    }
    // `as` saturates at u32::MAX
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(periods as u32)
}

fn lenient_tier<'de, D>(deserializer: D) -> std::result::Result<SubscriptionTier, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(de::Error::custom)
}
