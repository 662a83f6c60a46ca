//! Definitions command implementation

use crate::{commands::OutputFormat, utils::formatting::format_json};
use anyhow::Result;
use serde::Serialize;

/// One glossary entry
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Definition {
    pub term: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Terms used in the calculator output
pub const DEFINITIONS: [Definition; 6] = [
    Definition {
        term: "CLV",
        name: "Customer Lifetime Value",
        description: "The total revenue you can expect from a single customer during their time using your product or service.",
    },
    Definition {
        term: "CAC",
        name: "Customer Acquisition Cost",
        description: "The cost of acquiring a new customer. Here it is the referral commission paid on the plan's list price.",
    },
    Definition {
        term: "Net Revenue",
        name: "Net Revenue",
        description: "Revenue after deducting payment processor and platform fees.",
    },
    Definition {
        term: "Net Profit per User",
        name: "Net Profit per User",
        description: "Net revenue minus the cost of acquisition. This is what you actually keep per customer.",
    },
    Definition {
        term: "Affiliate Program",
        name: "Affiliate / Referral Program",
        description: "Third parties paid a commission for referring paying customers.",
    },
    Definition {
        term: "Tier ROI",
        name: "Return on Investment of the tracking tool",
        description: "Projected referral revenue compared with a year of the referral-tracking subscription.",
    },
];

/// Execute the definitions command
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn execute(output_format: &OutputFormat) -> Result<String> {
    match output_format {
        OutputFormat::Human => Ok(DEFINITIONS
            .iter()
            .map(|d| {
                if d.term == d.name {
                    format!("{}\n  {}", d.term, d.description)
                } else {
                    format!("{} - {}\n  {}", d.term, d.name, d.description)
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")),
        OutputFormat::Json => format_json(&DEFINITIONS),
    }
}
