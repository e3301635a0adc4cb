use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

use crate::demo::DemoDataset;
use crate::error::Error;
use crate::model::BreachRecord;

/// Production base URL of the breached-account API.
pub const DEFAULT_ACCOUNT_BASE: &str = "https://haveibeenpwned.com/api/v3";

/// Header carrying the API key, per the upstream contract.
const API_KEY_HEADER: &str = "hibp-api-key";

/// Placeholder key shipped in sample configs; selects demo mode.
const PLACEHOLDER_KEY: &str = "your-have-i-been-pwned-api-key-here";

/// The configured upstream credential, after sentinel detection.
///
/// Absent, empty, `demo` and the sample placeholder all mean "no usable
/// key": the email flow then answers from the embedded demo dataset instead
/// of the live API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Live(String),
    Demo,
}

impl Credential {
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            None => Credential::Demo,
            Some(key) if key.is_empty() || key == "demo" || key == PLACEHOLDER_KEY => {
                Credential::Demo
            }
            Some(key) => Credential::Live(key.to_string()),
        }
    }

    /// Reads the credential from [`API_KEY_ENV`](crate::API_KEY_ENV).
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(crate::API_KEY_ENV).ok().as_deref())
    }
}

/// Client for the live breached-account API.
pub struct AccountClient {
    http: reqwest::Client,
    base: Url,
    api_key: String,
}

impl AccountClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let base = Url::parse(DEFAULT_ACCOUNT_BASE).expect("default base URL is valid");
        Self::with_base(base, api_key)
    }

    /// Points the client at a different account API. Used by tests.
    pub fn with_base(base: Url, api_key: impl Into<String>) -> Self {
        Self {
            http: crate::default_http_client(),
            base,
            api_key: api_key.into(),
        }
    }

    /// Fetches the breaches a validated email address appeared in.
    ///
    /// Upstream 404 means "no breaches" and yields an empty list; 429 and
    /// other failures map to distinct errors so callers can tell a clean
    /// result from a refusal. Never retries.
    pub async fn breaches_for(&self, email: &str) -> Result<Vec<BreachRecord>, Error> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .expect("account base URL cannot be opaque")
            .pop_if_empty()
            .push("breachedaccount")
            .push(email);

        let response = self
            .http
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(Error::AccountRequest)?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimited),
            status if status.is_success() => {
                response.json().await.map_err(Error::AccountDecode)
            }
            status => {
                warn!(status = status.as_u16(), "account API error");
                Err(Error::AccountStatus { status: status.as_u16() })
            }
        }
    }
}

/// The email-flow entry point: live API or demo fallback, chosen once from
/// the configured credential.
pub enum AccountChecker {
    Live(AccountClient),
    Demo(DemoDataset),
}

impl AccountChecker {
    pub fn from_credential(credential: Credential) -> Self {
        match credential {
            Credential::Live(key) => AccountChecker::Live(AccountClient::new(key)),
            Credential::Demo => AccountChecker::Demo(DemoDataset::load()),
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, AccountChecker::Demo(_))
    }

    /// Validates the email shape, then looks the address up in whichever
    /// backend is configured. Malformed input is never sent upstream.
    #[tracing::instrument(skip_all)]
    pub async fn breaches_for(&self, email: &str) -> Result<Vec<BreachRecord>, Error> {
        if !pwncheck_core::is_valid_email(email) {
            return Err(Error::InvalidEmail);
        }

        match self {
            AccountChecker::Live(client) => client.breaches_for(email).await,
            AccountChecker::Demo(dataset) => {
                debug!("demo mode: answering from embedded dataset");
                Ok(dataset.lookup(email).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::one_shot_http;

    #[test]
    fn sentinel_keys_select_demo_mode() {
        assert_eq!(Credential::resolve(None), Credential::Demo);
        assert_eq!(Credential::resolve(Some("")), Credential::Demo);
        assert_eq!(Credential::resolve(Some("demo")), Credential::Demo);
        assert_eq!(
            Credential::resolve(Some("your-have-i-been-pwned-api-key-here")),
            Credential::Demo
        );
        assert_eq!(
            Credential::resolve(Some("a-real-key")),
            Credential::Live("a-real-key".to_string())
        );
    }

    #[tokio::test]
    async fn decodes_breach_list() {
        let body = r#"[{"Name":"Adobe","Domain":"adobe.com"},{"Name":"LinkedIn"}]"#;
        let base = one_shot_http("200 OK", "application/json", body).await;

        let client = AccountClient::with_base(Url::parse(&base).unwrap(), "key");
        let breaches = client.breaches_for("user@example.com").await.unwrap();
        assert_eq!(breaches.len(), 2);
        assert_eq!(breaches[0].name, "Adobe");
    }

    #[tokio::test]
    async fn not_found_is_a_clean_empty_result() {
        let base = one_shot_http("404 Not Found", "application/json", "").await;

        let client = AccountClient::with_base(Url::parse(&base).unwrap(), "key");
        let breaches = client.breaches_for("user@example.com").await.unwrap();
        assert!(breaches.is_empty());
    }

    #[tokio::test]
    async fn rate_limiting_is_distinct_from_other_failures() {
        let base = one_shot_http("429 Too Many Requests", "application/json", "").await;
        let client = AccountClient::with_base(Url::parse(&base).unwrap(), "key");
        let err = client.breaches_for("user@example.com").await.unwrap_err();
        assert!(matches!(err, Error::RateLimited));

        let base = one_shot_http("500 Internal Server Error", "application/json", "").await;
        let client = AccountClient::with_base(Url::parse(&base).unwrap(), "key");
        let err = client.breaches_for("user@example.com").await.unwrap_err();
        assert!(matches!(err, Error::AccountStatus { status: 500 }));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_locally() {
        // demo checker: no network either way, but validation must come first
        let checker = AccountChecker::from_credential(Credential::Demo);
        let err = checker.breaches_for("not-an-email").await.unwrap_err();
        assert!(matches!(err, Error::InvalidEmail));
    }
}
