//! Page-template description: which selectors mark dates, sections,
//! locations and order links, and how vendor names are found.

use foodpark_core::{NameRule, SelectorConfig};
use scraper::Selector;

use crate::error::ExtractError;

/// Selector strings for one revision of the page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionStrategy {
    pub date_selector: String,
    pub container_selector: String,
    pub location_selector: String,
    pub anchor_selector: String,
    pub name_rule: NameRule,
}

impl Default for ExtractionStrategy {
    /// The current production layout.
    fn default() -> Self {
        Self {
            date_selector: "h1 > strong".to_string(),
            container_selector: "div.sqs-layout.sqs-grid-12.columns-12[data-type=page-section]"
                .to_string(),
            location_selector: "h2 > strong".to_string(),
            anchor_selector: ".sqs-block-button-element".to_string(),
            name_rule: NameRule::PrecedingSibling,
        }
    }
}

impl From<&SelectorConfig> for ExtractionStrategy {
    fn from(cfg: &SelectorConfig) -> Self {
        Self {
            date_selector: cfg.date_selector.clone(),
            container_selector: cfg.container_selector.clone(),
            location_selector: cfg.location_selector.clone(),
            anchor_selector: cfg.anchor_selector.clone(),
            name_rule: cfg.name_rule,
        }
    }
}

impl ExtractionStrategy {
    /// Parses every selector.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSelector`] naming the first selector
    /// that fails to parse.
    pub fn compile(&self) -> Result<CompiledStrategy, ExtractError> {
        Ok(CompiledStrategy {
            date_header: parse_selector(&self.date_selector)?,
            container: parse_selector(&self.container_selector)?,
            location_header: parse_selector(&self.location_selector)?,
            anchor: parse_selector(&self.anchor_selector)?,
            name_rule: self.name_rule,
        })
    }
}

/// An [`ExtractionStrategy`] with its selectors parsed, ready to run.
#[derive(Debug, Clone)]
pub struct CompiledStrategy {
    pub date_header: Selector,
    pub container: Selector,
    pub location_header: Selector,
    pub anchor: Selector,
    pub name_rule: NameRule,
}

fn parse_selector(raw: &str) -> Result<Selector, ExtractError> {
    Selector::parse(raw).map_err(|e| ExtractError::InvalidSelector {
        selector: raw.to_string(),
        reason: e.to_string(),
    })
}
