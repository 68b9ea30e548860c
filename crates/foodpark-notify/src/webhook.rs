//! Posting messages to a Slack incoming webhook.

use std::time::Duration;

use reqwest::Client;

use crate::error::NotifyError;
use crate::message::WebhookMessage;

pub struct WebhookClient {
    client: Client,
}

impl WebhookClient {
    /// # Errors
    ///
    /// Returns [`NotifyError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Posts `message` as JSON to `webhook_url`.
    ///
    /// Not retried: a timed-out post may still have been delivered, and a
    /// second attempt would duplicate the message in the channel.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::UnexpectedStatus`] if the webhook answers non-2xx.
    /// - [`NotifyError::Http`] on network or TLS failure.
    pub async fn post(&self, webhook_url: &str, message: &WebhookMessage) -> Result<(), NotifyError> {
        let response = self.client.post(webhook_url).json(message).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(
            channel = %message.channel,
            blocks = message.blocks.len(),
            "webhook message delivered"
        );
        Ok(())
    }
}
