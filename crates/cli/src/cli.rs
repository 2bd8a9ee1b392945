use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};

use dropday_core::config::SchedulingConfig;

/// Delivery-window planner for the storefront.
///
/// Reads zone rules and denied dates from a YAML catalog and reports which
/// dates a region can receive deliveries on.
#[derive(Parser, Debug)]
#[command(name = "dropday", version, about)]
pub struct CliArgs {
    /// Path to the delivery catalog YAML (overrides CATALOG_PATH)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Display language: en, nl or de (overrides LOCALE)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Evaluate as if it were this local time, e.g. 2024-05-06T10:00:00
    #[arg(long, global = true)]
    pub now: Option<NaiveDateTime>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the next available delivery dates for the date picker
    Available {
        /// Region key, usually a postal code
        region: String,

        /// Weekly cycles to search forward
        #[arg(long)]
        horizon_weeks: Option<u32>,

        /// Stop after this many available dates
        #[arg(long)]
        count: Option<u32>,
    },

    /// Show the single earliest delivery date across all zones
    Earliest(EarliestArgs),

    /// Render the "next delivery" notice sentence
    Notice(EarliestArgs),
}

#[derive(Args, Debug)]
pub struct EarliestArgs {
    /// Region key, usually a postal code
    pub region: String,

    /// Weekly cycles tried per zone before giving up
    #[arg(long)]
    pub max_attempts: Option<u32>,
}

impl CliArgs {
    /// Scheduling bounds with command-line overrides applied on top of `base`.
    pub fn scheduling(&self, base: SchedulingConfig) -> SchedulingConfig {
        let mut cfg = base;
        match &self.command {
            Command::Available {
                horizon_weeks,
                count,
                ..
            } => {
                if let Some(weeks) = horizon_weeks {
                    cfg.horizon_weeks = *weeks;
                }
                if let Some(count) = count {
                    cfg.result_count = *count;
                }
            }
            Command::Earliest(args) | Command::Notice(args) => {
                if let Some(attempts) = args.max_attempts {
                    cfg.max_attempts = attempts;
                }
            }
        }
        cfg
    }
}
