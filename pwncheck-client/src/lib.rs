//! HTTP clients for the two upstream breach databases.
//!
//! [`RangeClient`] checks a password against the Pwned Passwords corpus using
//! the k-anonymity range endpoint: only the first 5 hex characters of the
//! SHA1 digest go on the wire, and the suffix match is resolved locally by
//! `pwncheck-core`.
//!
//! [`AccountChecker`] looks up breached accounts by email, either against the
//! live HIBP v3 API (when an API key is configured) or against a small
//! embedded demo dataset when the key is absent or a recognized placeholder.
//!
//! Neither client retries: upstream failures surface immediately.

pub mod account;
pub mod demo;
pub mod error;
pub mod model;
pub mod password;

pub use account::{AccountChecker, AccountClient, Credential, DEFAULT_ACCOUNT_BASE};
pub use demo::{DEMO_MESSAGE, DemoDataset};
pub use error::Error;
pub use model::BreachRecord;
pub use password::{DEFAULT_RANGE_BASE, RangeClient};

/// User-Agent sent on every upstream request. HIBP rejects anonymous agents.
pub const USER_AGENT: &str = concat!("pwncheck/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the HIBP API key.
pub const API_KEY_ENV: &str = "HIBP_API_KEY";

/// Per-request timeout. The upstream default would block indefinitely.
pub(crate) const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

pub(crate) fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
}

#[cfg(test)]
pub(crate) mod testutil;
