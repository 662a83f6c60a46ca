//! Shared helpers for the Referral Calc CLI

pub mod formatting;
