use pwncheck_core::{PolicyError, RangeError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("HTTP request failed for prefix {prefix}: {source}")]
    RangeRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for prefix {prefix}")]
    RangeStatus { prefix: String, status: u16 },

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("account lookup request failed: {0}")]
    AccountRequest(#[source] reqwest::Error),

    #[error("account lookup rate limited")]
    RateLimited,

    #[error("HTTP {status} for account lookup")]
    AccountStatus { status: u16 },

    #[error("failed to decode breach records: {0}")]
    AccountDecode(#[source] reqwest::Error),
}
