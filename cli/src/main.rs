//! Referral Calc CLI - Command-line interface for subscription referral economics
//!
//! Estimates customer lifetime value, acquisition cost and profit for a
//! monthly and an annual plan, projects affiliate referral revenue, and
//! works out whether the referral-tracking subscription pays for itself.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use referral_calc_cli::{
    commands::{self, OutputFormat},
    config::CliConfig,
    settings::{InputOverrides, SavedDefaults},
    utils::formatting::format_json_error,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "referral-calc",
    version,
    about = "Referral CAC vs CLV calculator with real fees",
    author = "Referral Calc Team"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Saved-defaults file
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate both plans, the referral projection and the tracking tool ROI
    Evaluate {
        #[command(flatten)]
        overrides: InputOverrides,
    },

    /// Compare the monthly and annual plans
    Plans {
        #[command(flatten)]
        overrides: InputOverrides,
    },

    /// Project affiliate referral volume and revenue
    Referrals {
        #[command(flatten)]
        overrides: InputOverrides,
    },

    /// ROI of the referral-tracking subscription
    Roi {
        #[command(flatten)]
        overrides: InputOverrides,

        /// Use this annual revenue instead of the referral projection
        #[arg(long, allow_negative_numbers = true)]
        revenue: Option<f64>,
    },

    /// List the tracking tiers and their prices
    Tiers {
        #[command(flatten)]
        overrides: InputOverrides,
    },

    /// Inspect, save or reset the saved defaults
    Defaults {
        #[command(subcommand)]
        command: DefaultsCommands,
    },

    /// Explain the terms used in the output
    Definitions,
}

#[derive(Subcommand, Debug)]
enum DefaultsCommands {
    /// Show the current defaults
    Show,

    /// Save the given values as the new defaults
    Save {
        #[command(flatten)]
        overrides: InputOverrides,
    },

    /// Delete the saved defaults
    Reset,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::new();

    // Use configuration with CLI overrides
    let default_output_format = commands::parse_output_format(&config.default_output_format)?;
    let output_format = cli.output.unwrap_or(default_output_format);

    match execute_command(&cli, &config, output_format) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            match output_format {
                OutputFormat::Human => eprintln!("Error: {e:#}"),
                OutputFormat::Json => println!("{}", format_json_error(&format!("{e:#}"))),
            }
            std::process::exit(1);
        }
    }

    Ok(())
}

fn execute_command(cli: &Cli, config: &CliConfig, output_format: OutputFormat) -> Result<String> {
    let settings_path = cli
        .settings
        .clone()
        .unwrap_or_else(|| config.settings_path.clone());
    info!("Using settings file {}", settings_path.display());

    match &cli.command {
        Commands::Evaluate { overrides } => {
            let inputs = commands::load_inputs(&settings_path, overrides)?;
            commands::execute_evaluate(&inputs, &output_format, config)
        }

        Commands::Plans { overrides } => {
            let inputs = commands::load_inputs(&settings_path, overrides)?;
            commands::execute_plans(&inputs, &output_format, config)
        }

        Commands::Referrals { overrides } => {
            let inputs = commands::load_inputs(&settings_path, overrides)?;
            commands::execute_referrals(&inputs, &output_format, config)
        }

        Commands::Roi { overrides, revenue } => {
            let inputs = commands::load_inputs(&settings_path, overrides)?;
            commands::execute_roi(&inputs, *revenue, &output_format, config)
        }

        Commands::Tiers { overrides } => {
            let inputs = commands::load_inputs(&settings_path, overrides)?;
            commands::execute_tiers(&inputs.tier_pricing, inputs.tier, &output_format, config)
        }

        Commands::Defaults { command } => match command {
            DefaultsCommands::Show => {
                commands::execute_defaults_show(&settings_path, &output_format, config)
            }
            DefaultsCommands::Save { overrides } => {
                commands::execute_defaults_save(&settings_path, overrides, &output_format, config)
            }
            DefaultsCommands::Reset => {
                commands::execute_defaults_reset(&settings_path, &output_format)
            }
        },

        Commands::Definitions => commands::execute_definitions(&output_format),
    }
}
