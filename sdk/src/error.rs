//! Error types for the Referral Calc SDK
//!
//! The formula engine itself never fails: every ratio guards its denominator
//! and reports `0` instead of dividing by zero. The variants here cover the
//! few edges that do take untrusted text or need to describe a suspicious
//! input:
//!
//! - **`UnknownTier`** - a tier name that is not one of the published tiers
//! - **`InvalidInput`** - an input outside its sensible business range, as
//!   reported by [`crate::validation::validate_inputs`]
//!
//! # Example
//!
//! ```rust
//! use referral_calc_sdk::{error::CalcError, SubscriptionTier};
//!
//! match "platinum".parse::<SubscriptionTier>() {
//!     Ok(tier) => println!("Selected tier: {tier}"),
//!     Err(CalcError::UnknownTier(name)) => println!("No such tier: {name}"),
//!     Err(other) => println!("Other error: {other}"),
//! }
//! ```

use thiserror::Error;

/// Result type for Referral Calc SDK operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Error types that can occur when using the Referral Calc SDK
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Tier name did not match any published subscription tier
    #[error("Unknown subscription tier '{0}'. Expected one of: starter, growth, enterprise")]
    UnknownTier(String),

    /// Input outside its sensible range
    #[error("Invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl CalcError {
    /// Name of the offending input field
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::UnknownTier(_) => Some("tier"),
        }
    }
}
