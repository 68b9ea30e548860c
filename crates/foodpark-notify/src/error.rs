use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook rejected message with HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("failed to serialize webhook message: {0}")]
    Serialize(#[from] serde_json::Error),
}
