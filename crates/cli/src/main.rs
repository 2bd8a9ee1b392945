mod cli;
mod notice;
mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use dropday_core::config::load_dotenv;
use dropday_core::{Clock, Config, FixedClock, SystemClock};
use dropday_schedule::{DeliveryPlanner, Locale, YamlCatalog};

use crate::cli::{CliArgs, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let args = CliArgs::parse();
    let config = Config::from_env();
    config.log_summary();

    let locale: Locale = args
        .locale
        .as_deref()
        .unwrap_or(&config.catalog.locale)
        .parse()
        .map_err(anyhow::Error::msg)
        .context("invalid locale")?;
    let catalog_path = args.catalog.clone().unwrap_or_else(|| config.catalog.path.clone());
    let catalog = Arc::new(YamlCatalog::new(catalog_path));

    // One reading for the whole run.
    let now = args.now.unwrap_or_else(|| SystemClock.now());

    let planner = DeliveryPlanner::new(catalog.clone(), catalog, FixedClock(now))
        .with_config(args.scheduling(config.scheduling))
        .with_locale(locale);

    match &args.command {
        Command::Available { region, .. } => {
            let result = planner
                .available_dates(region)
                .await
                .with_context(|| format!("failed to plan deliveries for '{}'", region))?;
            info!(region = %result.region, slots = result.slots.len(), "available dates computed");
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", output::slots_table(&result));
            }
        }
        Command::Earliest(earliest) => {
            let found = planner
                .earliest_delivery(&earliest.region)
                .await
                .with_context(|| format!("failed to find earliest delivery for '{}'", earliest.region))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                println!("{}", output::earliest_line(found.as_ref(), locale));
            }
        }
        Command::Notice(earliest) => {
            let found = planner
                .earliest_delivery(&earliest.region)
                .await
                .with_context(|| format!("failed to find earliest delivery for '{}'", earliest.region))?;
            let sentence = notice::render(found.as_ref(), locale);
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "region": earliest.region,
                        "date": found.as_ref().map(|f| f.date),
                        "message": sentence,
                    }))?
                );
            } else {
                println!("{}", sentence);
            }
        }
    }

    Ok(())
}
