mod run;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::run::RunOptions;

#[derive(Debug, Parser)]
#[command(name = "foodpark")]
#[command(about = "Post the foodPark vendor list for a trading day to Slack")]
struct Cli {
    /// Trading day to report on (YYYY-MM-DD). Defaults to `FP_TARGET_DATE`,
    /// then to the next trading weekday.
    #[arg(long, value_parser = parse_date)]
    target_date: Option<NaiveDate>,

    /// Location filter, overriding `FP_LOCATION_FILTER_VALUE`.
    #[arg(long)]
    location: Option<String>,

    /// Read the page from a saved HTML file instead of fetching `FP_URL`.
    #[arg(long)]
    html_file: Option<PathBuf>,

    /// Print the message without posting it.
    #[arg(long)]
    dry_run: bool,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            target_date: cli.target_date,
            location: cli.location,
            html_file: cli.html_file,
            dry_run: cli.dry_run,
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = foodpark_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    run::run(&config, &RunOptions::from(cli)).await
}
