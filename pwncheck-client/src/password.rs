use pwncheck_core::{KAnonymitySplit, SecretPolicy, occurrences};
use tracing::debug;

use crate::error::Error;

/// Production base URL of the Pwned Passwords range endpoint.
pub const DEFAULT_RANGE_BASE: &str = "https://api.pwnedpasswords.com";

/// Client for the k-anonymity range endpoint.
///
/// A check is one round trip: `GET {base}/range/{PREFIX}` with the 5-char
/// digest prefix, then a local scan of the `SUFFIX:COUNT` lines. The secret
/// and its digest suffix never leave the process.
pub struct RangeClient {
    http: reqwest::Client,
    base: String,
    policy: SecretPolicy,
}

impl RangeClient {
    pub fn new() -> Self {
        Self::with_base(DEFAULT_RANGE_BASE)
    }

    /// Points the client at a different range endpoint. Used by tests.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            http: crate::default_http_client(),
            base: base.into(),
            policy: SecretPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SecretPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns how many times `secret` appears in the breach corpus, 0 when
    /// it is absent.
    ///
    /// Fails on rejected input, non-success upstream status, transport
    /// failure, or a malformed count on the matching line. Never retries.
    #[tracing::instrument(skip_all)]
    pub async fn occurrences(&self, secret: &str) -> Result<u64, Error> {
        self.policy.check(secret)?;

        let split = KAnonymitySplit::of_secret(secret);
        let url = format!("{}/range/{}", self.base, split.prefix());
        debug!(prefix = split.prefix(), "querying range endpoint");

        let response = self.http.get(&url).send().await.map_err(|source| {
            Error::RangeRequest { prefix: split.prefix().to_string(), source }
        })?;

        if !response.status().is_success() {
            return Err(Error::RangeStatus {
                prefix: split.prefix().to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| Error::RangeRequest {
            prefix: split.prefix().to_string(),
            source,
        })?;

        Ok(occurrences(&body, split.suffix())?)
    }
}

impl Default for RangeClient {
    fn default() -> Self {
        Self::new()
    }
}
