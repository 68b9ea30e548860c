//! Final checks on extracted records before they leave the pipeline.

use foodpark_core::{VendorListing, VendorRecord, WALK_UP_MARKER};

use crate::error::ExtractError;

/// Checks every record and computes the walk-up-only flag for the batch.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidRecord`] for the first record that breaks
/// a record invariant.
pub fn validate_records(
    location: String,
    vendors: Vec<VendorRecord>,
    date_token: &str,
) -> Result<VendorListing, ExtractError> {
    for (index, record) in vendors.iter().enumerate() {
        check_record(record, date_token).map_err(|reason| ExtractError::InvalidRecord {
            index,
            reason: reason.to_string(),
        })?;
    }

    let any_walk_up_only = vendors.iter().any(VendorRecord::is_walk_up_only);
    Ok(VendorListing {
        location,
        vendors,
        any_walk_up_only,
    })
}

fn check_record(record: &VendorRecord, date_token: &str) -> Result<(), &'static str> {
    if record.accepts_preorder() != record.order_url().is_some() {
        return Err("pre-order flag disagrees with order URL");
    }

    let bare_name = match record.order_url() {
        Some(url) => {
            if !url.contains(date_token) {
                return Err("order URL does not contain the target date");
            }
            record.name()
        }
        None => record
            .name()
            .strip_suffix(WALK_UP_MARKER)
            .ok_or("walk-up-only vendor name lacks the marker")?,
    };

    if bare_name.trim().is_empty() {
        return Err("vendor name is empty");
    }
    Ok(())
}
