//! Vendor extraction from the food park "who's trading" page.
//!
//! The pipeline runs synchronously over one parsed [`scraper::Html`]
//! snapshot: [`locate::locate_section`] finds the section for a date and
//! location, [`extract::extract_vendors`] reads its order links, and
//! [`validate::validate_records`] checks the result before handoff.

pub mod ascend;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod locate;
pub mod pipeline;
mod retry;
pub mod strategy;
pub mod text;
pub mod validate;

pub use ascend::{ascend, Ascent};
pub use error::{ExtractError, FetchError};
pub use fetch::PageClient;
pub use locate::{locate_section, Section};
pub use pipeline::{run_extraction, ExtractionRequest};
pub use strategy::{CompiledStrategy, ExtractionStrategy};
