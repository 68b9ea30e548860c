//! Reading vendor records out of a located section.

use foodpark_core::{NameRule, VendorRecord, WALK_UP_MARKER};
use scraper::ElementRef;

use crate::ascend::ascend;
use crate::error::ExtractError;
use crate::strategy::CompiledStrategy;
use crate::text::normalized_text;

/// Builds one [`VendorRecord`] per order-link anchor under `root`, in
/// document order.
///
/// An anchor with a non-empty `href` must contain `date_token`; an anchor
/// without one is a walk-up-only vendor and gets [`WALK_UP_MARKER`] appended
/// to its name.
///
/// # Errors
///
/// - [`ExtractError::DateMismatch`] for the first `href` lacking `date_token`.
/// - [`ExtractError::NameNotFound`] when an anchor's name cannot be resolved.
///
/// Either error discards every record built so far.
pub fn extract_vendors(
    root: ElementRef<'_>,
    strategy: &CompiledStrategy,
    date_token: &str,
) -> Result<Vec<VendorRecord>, ExtractError> {
    let mut records = Vec::new();

    for anchor in root.select(&strategy.anchor) {
        let url = anchor.value().attr("href").filter(|u| !u.is_empty());

        if let Some(url) = url {
            if !url.contains(date_token) {
                return Err(ExtractError::DateMismatch {
                    url: url.to_string(),
                    date_token: date_token.to_string(),
                });
            }
        }

        let mut name =
            resolve_name(anchor, strategy.name_rule).ok_or_else(|| ExtractError::NameNotFound {
                url: url.unwrap_or_default().to_string(),
            })?;
        if url.is_none() {
            name.push(WALK_UP_MARKER);
        }

        tracing::debug!(name = %name, url = url.unwrap_or_default(), "vendor anchor resolved");
        records.push(VendorRecord::new(name, url.map(str::to_string)));
    }

    Ok(records)
}

fn resolve_name(anchor: ElementRef<'_>, rule: NameRule) -> Option<String> {
    match rule {
        NameRule::PrecedingSibling => ascend(anchor, |ancestor| preceding_label(ancestor).is_some())
            .found()
            .and_then(preceding_label),
        NameRule::AnchorText => Some(normalized_text(&anchor)).filter(|t| !t.is_empty()),
    }
}

/// Normalized text of the element sibling immediately before `element`,
/// when that sibling exists and is not blank.
///
/// The ascent may reach `<body>`, whose preceding sibling is `<head>`: an
/// anchor with no label anywhere above it is named after the page title.
fn preceding_label(element: ElementRef<'_>) -> Option<String> {
    element
        .prev_siblings()
        .find_map(ElementRef::wrap)
        .map(|sibling| normalized_text(&sibling))
        .filter(|text| !text.is_empty())
}
