//! The inbound HTTP surface for the email flow.
//!
//! One route, `GET /check-breach?email=...`, answered with a JSON body and
//! permissive CORS headers so a browser page on any origin can call it. The
//! actual lookup is delegated to `pwncheck_client::AccountChecker`, so the
//! endpoint behaves identically in live and demo mode apart from the `demo`
//! marker on the body.

use bytes::Bytes;
use http::{Method, Request, Response, StatusCode, header};
use http_body_util::Full;
use pwncheck_client::{AccountChecker, BreachRecord, DEMO_MESSAGE, Error};
use serde::Serialize;
use tracing::{error, info};

/// The one route this gateway serves.
pub const CHECK_ROUTE: &str = "/check-breach";

/// Body shape of every response, success or failure.
#[derive(Debug, Serialize)]
struct CheckBody {
    breached: bool,
    breaches: Vec<BreachRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    demo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub struct Gateway {
    checker: AccountChecker,
}

impl Gateway {
    pub fn new(checker: AccountChecker) -> Self {
        Self { checker }
    }

    /// Routes one request. Infallible: every failure becomes a JSON error
    /// body with the appropriate status.
    pub async fn handle<B>(&self, req: Request<B>) -> Response<Full<Bytes>> {
        if req.method() == Method::OPTIONS {
            return preflight();
        }
        if req.uri().path() != CHECK_ROUTE {
            return json_error(StatusCode::NOT_FOUND, "Not found");
        }
        if req.method() != Method::GET {
            return json_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
        }

        info!("breach check request received");

        let Some(email) = query_param(req.uri().query(), "email") else {
            return json_error(StatusCode::BAD_REQUEST, "Email parameter is required");
        };
        if !pwncheck_core::is_valid_email(&email) {
            return json_error(StatusCode::BAD_REQUEST, "Invalid email format");
        }

        match self.checker.breaches_for(&email).await {
            Ok(breaches) => {
                let demo = self.checker.is_demo();
                json_response(StatusCode::OK, &CheckBody {
                    breached: !breaches.is_empty(),
                    breaches,
                    demo: demo.then_some(true),
                    message: demo.then(|| DEMO_MESSAGE.to_string()),
                    error: None,
                })
            }
            Err(Error::InvalidEmail) => json_error(StatusCode::BAD_REQUEST, "Invalid email format"),
            Err(Error::RateLimited) => json_error(
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded. Please try again later.",
            ),
            Err(err) => {
                error!(error = %err, "breach check failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to check breach status")
            }
        }
    }
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn cors(builder: http::response::Builder) -> http::response::Builder {
    builder
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
        .header(header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS")
        .header(header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type")
}

fn preflight() -> Response<Full<Bytes>> {
    cors(Response::builder().status(StatusCode::NO_CONTENT))
        .body(Full::new(Bytes::new()))
        .expect("preflight response is well-formed")
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let bytes = serde_json::to_vec(body).expect("response body serializes");
    cors(Response::builder().status(status))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::new(Bytes::from(bytes)))
        .expect("response is well-formed")
}

fn json_error(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    json_response(status, &CheckBody {
        breached: false,
        breaches: Vec::new(),
        demo: None,
        message: None,
        error: Some(message.to_string()),
    })
}
