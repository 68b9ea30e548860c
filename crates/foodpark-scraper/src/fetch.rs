//! HTTP client for the vendor listing page.

use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;
use crate::retry::retry_with_backoff;

pub struct PageClient {
    client: Client,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl PageClient {
    /// Creates a `PageClient` with a request timeout, `User-Agent`, and retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure; `0` disables retries.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches the HTML body at `url`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::UnexpectedStatus`] for a non-2xx response (429 and 5xx
    ///   only after retries are exhausted).
    /// - [`FetchError::EmptyBody`] when the page body is blank.
    /// - [`FetchError::Http`] on network or TLS failure after retries.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            self.fetch_once(url)
        })
        .await
    }

    async fn fetch_once(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                url: url.to_owned(),
            });
        }
        tracing::debug!(url, bytes = body.len(), "fetched vendor page");
        Ok(body)
    }
}
