//! Exponential backoff for transient page-fetch failures.

use std::future::Future;
use std::time::Duration;

use crate::error::FetchError;

/// Network failures, 429 and 5xx responses are worth another attempt;
/// other statuses and empty bodies are not.
fn is_transient(err: &FetchError) -> bool {
    match err {
        FetchError::Http(_) => true,
        FetchError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        FetchError::EmptyBody { .. } => false,
    }
}

/// Wait before retry number `retry` (0-based): `base * 2^retry` seconds.
fn backoff_delay(backoff_base_secs: u64, retry: u32) -> Duration {
    Duration::from_secs(backoff_base_secs.saturating_mul(1u64 << retry.min(62)))
}

/// Runs `fetch` once, then up to `max_retries` more times while it fails
/// with a transient error. The last error is returned when retries run out.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut fetch: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut retry = 0u32;
    loop {
        match fetch().await {
            Ok(body) => return Ok(body),
            Err(err) if retry < max_retries && is_transient(&err) => {
                let delay = backoff_delay(backoff_base_secs, retry);
                tracing::warn!(
                    retry = retry + 1,
                    max_retries,
                    delay_secs = delay.as_secs(),
                    error = %err,
                    "page fetch failed, backing off"
                );
                tokio::time::sleep(delay).await;
                retry += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
