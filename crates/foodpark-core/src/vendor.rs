//! Vendor records handed from the extraction pipeline to message composers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Appended to a vendor name when the vendor takes no online pre-orders.
pub const WALK_UP_MARKER: char = '*';

/// One vendor trading at the target date and location.
///
/// Built once per order-link anchor and never mutated. `accepts_preorder`
/// is derived from the presence of `order_url`, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorRecord {
    name: String,
    order_url: Option<String>,
    accepts_preorder: bool,
}

impl VendorRecord {
    /// Creates a record. An empty URL is treated as absent.
    #[must_use]
    pub fn new(name: impl Into<String>, order_url: Option<String>) -> Self {
        let order_url = order_url.filter(|u| !u.is_empty());
        Self {
            name: name.into(),
            accepts_preorder: order_url.is_some(),
            order_url,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn order_url(&self) -> Option<&str> {
        self.order_url.as_deref()
    }

    #[must_use]
    pub fn accepts_preorder(&self) -> bool {
        self.accepts_preorder
    }

    /// `true` when the vendor is only available in person.
    #[must_use]
    pub fn is_walk_up_only(&self) -> bool {
        !self.accepts_preorder
    }
}

/// The validated result of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorListing {
    /// Full text of the location header that matched the filter.
    pub location: String,
    /// Vendors in source document order.
    pub vendors: Vec<VendorRecord>,
    /// Set when at least one vendor has no order URL.
    pub any_walk_up_only: bool,
}

/// How a vendor's display name is found relative to its order-link anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameRule {
    /// Walk up from the anchor; the first ancestor with a non-blank preceding
    /// sibling element supplies the name.
    #[default]
    PrecedingSibling,
    /// The anchor's own text is the name.
    AnchorText,
}

impl FromStr for NameRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preceding-sibling" => Ok(Self::PrecedingSibling),
            "anchor-text" => Ok(Self::AnchorText),
            other => Err(format!(
                "unknown name rule \"{other}\" (expected preceding-sibling or anchor-text)"
            )),
        }
    }
}

impl fmt::Display for NameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrecedingSibling => write!(f, "preceding-sibling"),
            Self::AnchorText => write!(f, "anchor-text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_with_url_accepts_preorder() {
        let rec = VendorRecord::new("Taco Truck", Some("https://x/2024-01-04/order".into()));
        assert!(rec.accepts_preorder());
        assert!(!rec.is_walk_up_only());
        assert_eq!(rec.order_url(), Some("https://x/2024-01-04/order"));
    }

    #[test]
    fn record_with_empty_url_is_walk_up_only() {
        let rec = VendorRecord::new("Pizza Van*", Some(String::new()));
        assert!(!rec.accepts_preorder());
        assert_eq!(rec.order_url(), None);
    }

    #[test]
    fn record_serializes_null_url() {
        let rec = VendorRecord::new("Pizza Van*", None);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["name"], "Pizza Van*");
        assert!(json["order_url"].is_null());
        assert_eq!(json["accepts_preorder"], false);
    }

    #[test]
    fn name_rule_parses_known_values() {
        assert_eq!(
            "preceding-sibling".parse::<NameRule>().unwrap(),
            NameRule::PrecedingSibling
        );
        assert_eq!(" Anchor-Text ".parse::<NameRule>().unwrap(), NameRule::AnchorText);
    }

    #[test]
    fn name_rule_rejects_unknown_value() {
        assert!("sibling".parse::<NameRule>().is_err());
    }

    #[test]
    fn name_rule_display_round_trips() {
        let rule = NameRule::AnchorText;
        assert_eq!(rule.to_string().parse::<NameRule>().unwrap(), rule);
    }
}
