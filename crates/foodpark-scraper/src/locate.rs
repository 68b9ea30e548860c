//! Finding the page section that holds one date's vendors at one location.

use scraper::{ElementRef, Html};

use crate::ascend::ascend;
use crate::error::ExtractError;
use crate::strategy::CompiledStrategy;
use crate::text::normalized_text;

/// The section enclosing every vendor entry for one (date, location) pair.
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    pub root: ElementRef<'a>,
    /// The matched location header's element.
    pub location_header: ElementRef<'a>,
}

impl Section<'_> {
    /// Normalized full text of the location header that matched the filter.
    #[must_use]
    pub fn location_name(&self) -> String {
        normalized_text(&self.location_header)
    }
}

/// Locates the section for `target_header` and `location_filter`.
///
/// The first date header whose normalized text equals `target_header` is
/// taken, and its nearest container ancestor is searched for the first
/// location header containing `location_filter` (case-insensitive). The
/// nearest container above that location header is the section root.
/// Later matches at either level are ignored.
///
/// # Errors
///
/// - [`ExtractError::TargetNotFound`] if no date header matches, or the
///   matching header has no container ancestor below the document root.
/// - [`ExtractError::LocationNotFound`] if the date container holds no
///   matching location header, or that header has no container ancestor.
pub fn locate_section<'a>(
    document: &'a Html,
    strategy: &CompiledStrategy,
    target_header: &str,
    location_filter: &str,
) -> Result<Section<'a>, ExtractError> {
    let target_not_found = || ExtractError::TargetNotFound {
        header: target_header.to_string(),
    };
    let location_not_found = || ExtractError::LocationNotFound {
        filter: location_filter.to_string(),
    };
    let is_container = |el: ElementRef<'a>| strategy.container.matches(&el);

    let date_header = document
        .select(&strategy.date_header)
        .find(|h| normalized_text(h) == target_header)
        .ok_or_else(target_not_found)?;

    let date_container = ascend(date_header, is_container)
        .found()
        .ok_or_else(target_not_found)?;
    tracing::debug!(
        header = target_header,
        container = ?date_container.value(),
        "date header resolved to container"
    );

    let filter = location_filter.to_lowercase();
    let location_header = date_container
        .select(&strategy.location_header)
        .find(|h| normalized_text(h).to_lowercase().contains(&filter))
        .ok_or_else(location_not_found)?;

    let root = ascend(location_header, is_container)
        .found()
        .ok_or_else(location_not_found)?;

    let section = Section {
        root,
        location_header,
    };
    tracing::debug!(location = %section.location_name(), "location section resolved");
    Ok(section)
}
