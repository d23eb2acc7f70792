//! Submission client implementation.

use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use sigil_core::{FingerprintRecord, Result, SigilError};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// What the endpoint acknowledged
///
/// The endpoint is expected to answer with JSON, but a non-JSON body is
/// tolerated: the receipt then carries the raw text instead of parsed
/// fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitReceipt {
    /// Status string from the endpoint (e.g. `"ok"`)
    #[serde(default)]
    pub status: Option<String>,

    /// Identifier assigned to the stored fingerprint
    #[serde(default)]
    pub fingerprint_id: Option<i64>,

    /// Raw response body, kept when the endpoint did not answer with JSON
    #[serde(skip)]
    pub raw_body: Option<String>,
}

/// Client delivering fingerprint records to a submission endpoint
#[derive(Clone, Debug)]
pub struct SubmitClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: HttpClient,
    endpoint: Url,
    timeout: Duration,
}

impl SubmitClient {
    /// Create a client for the given endpoint using default settings
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        SubmitClientBuilder::new(endpoint).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(endpoint: impl Into<String>) -> SubmitClientBuilder {
        SubmitClientBuilder::new(endpoint)
    }

    /// Deliver one record: a single POST with an `application/json` body.
    ///
    /// The record itself is untouched by any outcome here.
    pub async fn submit(&self, record: &FingerprintRecord) -> Result<SubmitReceipt> {
        let url = self.inner.endpoint.clone();
        debug!(url = %url, "POST fingerprint record");

        let response = self
            .inner
            .http
            .post(url)
            .json(record)
            .send()
            .await
            .map_err(|e| classify(&e, self.inner.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), response).await);
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response
            .text()
            .await
            .map_err(|e| SigilError::Http(e.to_string()))?;

        if content_type.contains("application/json") {
            Ok(serde_json::from_str(&body)?)
        } else {
            warn!(content_type = %content_type, "expected JSON acknowledgement, keeping raw body");
            Ok(SubmitReceipt {
                raw_body: Some(body),
                ..SubmitReceipt::default()
            })
        }
    }
}

/// Map a transport-layer failure onto the error taxonomy
fn classify(error: &reqwest::Error, timeout: Duration) -> SigilError {
    warn!(error = %error, "record delivery failed");
    if error.is_timeout() {
        SigilError::Timeout(timeout.as_secs())
    } else if error.is_connect() {
        SigilError::Connection(error.to_string())
    } else {
        SigilError::Http(error.to_string())
    }
}

/// Convert an error response, extracting a JSON `error` field when present
async fn error_from_response(code: u16, response: reqwest::Response) -> SigilError {
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body);

    warn!(code, message = %message, "submission rejected");
    SigilError::Api { code, message }
}

/// Builder for configuring a [`SubmitClient`]
pub struct SubmitClientBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: String,
}

impl SubmitClientBuilder {
    /// Create a new builder for the given endpoint
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("sigil/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<SubmitClient> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| SigilError::InvalidEndpoint(format!("{}: {e}", self.endpoint)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| SigilError::Config(e.to_string()))?;

        Ok(SubmitClient {
            inner: Arc::new(ClientInner {
                http,
                endpoint,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigil_core::RecordParts;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record() -> FingerprintRecord {
        RecordParts::default().assemble()
    }

    #[tokio::test]
    async fn submit_parses_json_receipt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/fingerprint/"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok",
                "fingerprint_id": 17
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = SubmitClient::new(format!("{}/fingerprint/", server.uri())).unwrap();
        let receipt = client.submit(&record()).await.unwrap();

        assert_eq!(receipt.status.as_deref(), Some("ok"));
        assert_eq!(receipt.fingerprint_id, Some(17));
        assert_eq!(receipt.raw_body, None);
    }

    #[tokio::test]
    async fn non_json_acknowledgement_is_tolerated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("thanks")
                    .insert_header("content-type", "text/plain"),
            )
            .mount(&server)
            .await;

        let client = SubmitClient::new(format!("{}/fingerprint/", server.uri())).unwrap();
        let receipt = client.submit(&record()).await.unwrap();

        assert_eq!(receipt.fingerprint_id, None);
        assert_eq!(receipt.raw_body.as_deref(), Some("thanks"));
    }

    #[tokio::test]
    async fn rejection_surfaces_error_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({"error": "schema mismatch"})),
            )
            .mount(&server)
            .await;

        let client = SubmitClient::new(format!("{}/fingerprint/", server.uri())).unwrap();
        let err = client.submit(&record()).await.unwrap_err();

        match err {
            SigilError::Api { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "schema mismatch");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_endpoint_is_rejected_at_build() {
        let err = SubmitClient::new("not a url").unwrap_err();
        assert!(matches!(err, SigilError::InvalidEndpoint(_)));
    }
}
