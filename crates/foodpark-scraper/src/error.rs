use thiserror::Error;

/// Terminal failures of one extraction attempt.
///
/// The first error halts the pipeline; no partial vendor list accompanies it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no page section found for date header \"{header}\"")]
    TargetNotFound { header: String },

    #[error("no page section found for location matching \"{filter}\"")]
    LocationNotFound { filter: String },

    #[error("order URL {url} does not contain target date {date_token}")]
    DateMismatch { url: String, date_token: String },

    #[error("could not resolve a vendor name for anchor (url: {url})")]
    NameNotFound { url: String },

    #[error("invalid CSS selector \"{selector}\": {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("vendor record {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("empty response body from {url}")]
    EmptyBody { url: String },
}
