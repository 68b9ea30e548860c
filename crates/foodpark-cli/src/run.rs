//! One end-to-end run: pick the date, get the page, extract, compose, deliver.

use std::path::PathBuf;

use anyhow::Context;
use chrono::{NaiveDate, Weekday};
use foodpark_core::{next_trading_day, AppConfig, TargetDate, VendorListing};
use foodpark_notify::{compose_message, WebhookClient};
use foodpark_scraper::{
    run_extraction, CompiledStrategy, ExtractError, ExtractionRequest, ExtractionStrategy,
    PageClient,
};
use scraper::Html;

#[derive(Debug, Default)]
pub(crate) struct RunOptions {
    pub target_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub html_file: Option<PathBuf>,
    pub dry_run: bool,
}

/// Command-line date, then configured date, then the next trading weekday.
pub(crate) fn resolve_target(
    cli_date: Option<NaiveDate>,
    config_date: Option<NaiveDate>,
    weekday: Weekday,
    today: NaiveDate,
) -> TargetDate {
    let date = cli_date
        .or(config_date)
        .unwrap_or_else(|| next_trading_day(today, weekday));
    TargetDate::new(date)
}

pub(crate) async fn run(config: &AppConfig, opts: &RunOptions) -> anyhow::Result<()> {
    let target = resolve_target(
        opts.target_date,
        config.target_date,
        config.trading_weekday,
        chrono::Local::now().date_naive(),
    );
    let location_filter = opts.location.as_deref().unwrap_or(&config.location_filter);
    let request = ExtractionRequest::for_date(target, &config.date_format, location_filter);
    let strategy = ExtractionStrategy::from(&config.selectors).compile()?;

    tracing::info!(
        date = %target.token(),
        header = %request.target_header,
        location = location_filter,
        "looking up vendors"
    );

    let html = match &opts.html_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => PageClient::new(
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )?
        .fetch_page(&config.page_url)
        .await
        .context("failed to fetch foodPark page")?,
    };

    let listing = extract_listing(&html, &strategy, &request)
        .context("failed to find foodPark options in page data")?;

    let message = compose_message(&listing, &target, &config.slack);
    println!("{}", message.to_json()?);

    if opts.dry_run {
        tracing::info!("dry run, message not posted");
        return Ok(());
    }

    WebhookClient::new(config.request_timeout_secs, &config.user_agent)?
        .post(&config.slack.webhook_url, &message)
        .await
        .context("failed to send Slack message")?;
    Ok(())
}

/// Parses `html` and runs the extraction; the parsed tree never outlives this call.
pub(crate) fn extract_listing(
    html: &str,
    strategy: &CompiledStrategy,
    request: &ExtractionRequest,
) -> Result<VendorListing, ExtractError> {
    let document = Html::parse_document(html);
    run_extraction(&document, strategy, request)
}
