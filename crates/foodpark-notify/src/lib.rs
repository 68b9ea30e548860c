//! Turning a [`foodpark_core::VendorListing`] into a Slack incoming-webhook
//! message and delivering it.

pub mod error;
pub mod message;
pub mod webhook;

pub use error::NotifyError;
pub use message::{compose_message, Block, ButtonElement, ButtonStyle, TextObject, WebhookMessage};
pub use webhook::WebhookClient;
