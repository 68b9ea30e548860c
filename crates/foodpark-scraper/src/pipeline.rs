//! locate → extract → validate over one parsed page.

use foodpark_core::{TargetDate, VendorListing};
use scraper::Html;

use crate::error::ExtractError;
use crate::extract::extract_vendors;
use crate::locate::locate_section;
use crate::strategy::CompiledStrategy;
use crate::validate::validate_records;

/// Per-run inputs, already rendered to the strings the page uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    /// Date header text exactly as it appears once normalized, e.g. `THU 04 JANUARY`.
    pub target_header: String,
    /// Case-insensitive substring of the location header.
    pub location_filter: String,
    /// Substring every order URL must contain, e.g. `2024-01-04`.
    pub date_token: String,
}

impl ExtractionRequest {
    /// Renders `target` with the page's header `date_format`.
    #[must_use]
    pub fn for_date(target: TargetDate, date_format: &str, location_filter: &str) -> Self {
        Self {
            target_header: target.header(date_format),
            location_filter: location_filter.to_string(),
            date_token: target.token(),
        }
    }
}

/// Runs the full pipeline against `document`.
///
/// Deterministic for a given document, strategy and request.
///
/// # Errors
///
/// Returns the first [`ExtractError`] raised by any stage.
pub fn run_extraction(
    document: &Html,
    strategy: &CompiledStrategy,
    request: &ExtractionRequest,
) -> Result<VendorListing, ExtractError> {
    let section = locate_section(
        document,
        strategy,
        &request.target_header,
        &request.location_filter,
    )?;
    let vendors = extract_vendors(section.root, strategy, &request.date_token)?;
    let listing = validate_records(section.location_name(), vendors, &request.date_token)?;

    tracing::info!(
        location = %listing.location,
        vendors = listing.vendors.len(),
        any_walk_up_only = listing.any_walk_up_only,
        "vendor extraction complete"
    );
    Ok(listing)
}
