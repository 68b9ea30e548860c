//! Slack Block Kit payload for the vendor digest.

use foodpark_core::{SlackSettings, TargetDate, VendorListing, VendorRecord};
use serde::Serialize;

use crate::error::NotifyError;

/// Slack caps an actions block at this many elements.
const MAX_ACTIONS_PER_BLOCK: usize = 25;

const WALK_UP_FOOTNOTE: &str = "* _denotes a truck not currently taking pre-orders._";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    pub username: String,
    pub channel: String,
    pub icon_url: String,
    pub blocks: Vec<Block>,
}

impl WebhookMessage {
    /// Compact JSON, as posted to the webhook.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, NotifyError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: TextObject },
    Actions { elements: Vec<ButtonElement> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String },
    Mrkdwn { text: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "button")]
pub struct ButtonElement {
    pub text: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl From<&VendorRecord> for ButtonElement {
    /// Pre-order vendors get a highlighted link button; walk-up-only vendors
    /// a plain one with no link.
    fn from(vendor: &VendorRecord) -> Self {
        Self {
            text: TextObject::PlainText {
                text: vendor.name().to_string(),
            },
            style: vendor.accepts_preorder().then_some(ButtonStyle::Primary),
            url: vendor.order_url().map(str::to_string),
        }
    }
}

/// Builds the digest message: a header, the vendor buttons in listing order,
/// and a footnote explaining the marker when any vendor is walk-up-only.
#[must_use]
pub fn compose_message(
    listing: &VendorListing,
    target: &TargetDate,
    slack: &SlackSettings,
) -> WebhookMessage {
    let mut blocks = vec![Block::Section {
        text: TextObject::Mrkdwn {
            text: format!(
                "*foodPark Menus for {} at {}*",
                target.token(),
                listing.location
            ),
        },
    }];

    blocks.extend(
        listing
            .vendors
            .chunks(MAX_ACTIONS_PER_BLOCK)
            .map(|chunk| Block::Actions {
                elements: chunk.iter().map(ButtonElement::from).collect(),
            }),
    );

    if listing.any_walk_up_only {
        blocks.push(Block::Section {
            text: TextObject::Mrkdwn {
                text: WALK_UP_FOOTNOTE.to_string(),
            },
        });
    }

    WebhookMessage {
        username: slack.username.clone(),
        channel: slack.channel.clone(),
        icon_url: slack.icon_url.clone(),
        blocks,
    }
}
