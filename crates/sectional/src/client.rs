//! Client for the request API.
//!
//! Each call sends exactly one request, never retries, and folds whatever
//! happened into an [`ApiOutcome`] that the page can present directly.

use std::{sync::Arc, time::Duration};

use serde::Deserialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{TransportError, ValidationError};
use crate::form::Application;
use crate::transport::{HttpRequest, HttpResponse, Transport};

const SUBMIT_PATH: &str = "/api/request";
const CANCEL_PATH: &str = "/api/cancel";
const PING_PATH: &str = "/api/ping";
const VALIDATE_INVITE_PATH: &str = "/api/invite/validate";

/// JSON body returned by every endpoint. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiReply {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    /// A string for handled errors, a list of objects for validation errors.
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiReply {
    fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// The text to show the user, if the server sent any.
    pub fn text(&self) -> Option<String> {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return Some(message.to_string());
        }
        match &self.detail {
            Some(Value::String(detail)) if !detail.is_empty() => Some(detail.clone()),
            Some(Value::String(_) | Value::Null) | None => self.status.clone(),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// How a request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// 2xx response.
    Accepted { message: String },
    /// Non-2xx response.
    Rejected { status: u16, message: String },
    /// The server could not be reached or the response could not be read.
    Failed { error: TransportError },
    /// Stopped by client-side checks; nothing was sent.
    Invalid(ValidationError),
}

impl ApiOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Accepted { .. })
    }

    /// User-facing text for this outcome.
    pub fn message(&self) -> String {
        match self {
            ApiOutcome::Accepted { message } | ApiOutcome::Rejected { message, .. } => {
                message.clone()
            }
            ApiOutcome::Failed { error } => error.to_string(),
            ApiOutcome::Invalid(error) => error.to_string(),
        }
    }

    fn from_response(response: HttpResponse) -> Self {
        let text = ApiReply::parse(&response.body).and_then(|reply| reply.text());

        if response.is_success() {
            ApiOutcome::Accepted {
                message: text.unwrap_or_else(|| "Done.".to_string()),
            }
        } else {
            ApiOutcome::Rejected {
                status: response.status,
                message: text
                    .unwrap_or_else(|| format!("Request failed with status {}", response.status)),
            }
        }
    }
}

/// Request API client. Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    timeout: Option<Duration>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, config: &ApiConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/request` with the application as JSON.
    pub async fn submit_request(&self, application: &Application) -> ApiOutcome {
        let body = match serde_json::to_value(application) {
            Ok(body) => body,
            Err(e) => {
                return ApiOutcome::Failed {
                    error: TransportError::Request(e.to_string()),
                };
            }
        };
        let request = HttpRequest::post(self.url(SUBMIT_PATH)).with_json(body);
        self.execute(request).await
    }

    /// `POST /api/cancel?nickname=...`.
    pub async fn cancel_request(&self, nickname: &str) -> ApiOutcome {
        let request = HttpRequest::post(self.url(CANCEL_PATH)).with_query("nickname", nickname);
        self.execute(request).await
    }

    /// `GET /api/ping`. Accepted with `"pong"` when the server is up.
    pub async fn ping(&self) -> ApiOutcome {
        self.execute(HttpRequest::get(self.url(PING_PATH))).await
    }

    /// `GET /api/invite/validate?code=...`.
    pub async fn validate_invite(&self, code: &str) -> ApiOutcome {
        let request = HttpRequest::get(self.url(VALIDATE_INVITE_PATH)).with_query("code", code);
        self.execute(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: HttpRequest) -> ApiOutcome {
        log::info!("{:?} {}", request.method, request.url);

        let sent = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.transport.send(request))
                .await
                .unwrap_or(Err(TransportError::Timeout(limit))),
            None => self.transport.send(request).await,
        };
        let outcome = match sent {
            Ok(response) => ApiOutcome::from_response(response),
            Err(error) => ApiOutcome::Failed { error },
        };

        match &outcome {
            ApiOutcome::Accepted { message } => log::info!("Request accepted: {}", message),
            ApiOutcome::Rejected { status, message } => {
                log::warn!("Request rejected ({}): {}", status, message)
            }
            ApiOutcome::Failed { error } => log::error!("Request failed: {}", error),
            ApiOutcome::Invalid(_) => {}
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: u16, body: &str) -> ApiOutcome {
        ApiOutcome::from_response(HttpResponse {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn success_uses_server_message() {
        assert_eq!(
            outcome(200, r#"{"success": true, "message": "Request sent."}"#),
            ApiOutcome::Accepted {
                message: "Request sent.".to_string()
            }
        );
    }

    #[test]
    fn error_detail_string_is_surfaced() {
        assert_eq!(
            outcome(500, r#"{"detail": "server error"}"#),
            ApiOutcome::Rejected {
                status: 500,
                message: "server error".to_string()
            }
        );
    }

    #[test]
    fn message_wins_over_detail() {
        let result = outcome(400, r#"{"message": "first", "detail": "second"}"#);
        assert_eq!(result.message(), "first");
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let result = outcome(422, r#"{"detail": [{"loc": ["body"], "msg": "bad"}]}"#);
        assert_eq!(result.message(), r#"[{"loc":["body"],"msg":"bad"}]"#);
    }

    #[test]
    fn non_json_error_body_gets_generic_message() {
        let result = outcome(502, "<html>Bad Gateway</html>");
        assert_eq!(result.message(), "Request failed with status 502");
        assert!(!result.is_success());
    }

    #[test]
    fn ping_status_counts_as_text() {
        assert_eq!(outcome(200, r#"{"status": "pong"}"#).message(), "pong");
    }

    #[test]
    fn empty_success_body_gets_default_text() {
        assert_eq!(outcome(204, "").message(), "Done.");
    }

    struct Recorder {
        seen: std::sync::Mutex<Vec<HttpRequest>>,
        body: &'static str,
    }

    #[async_trait::async_trait]
    impl Transport for Recorder {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(request);
            Ok(HttpResponse {
                status: 200,
                body: self.body.to_string(),
            })
        }
    }

    fn recording_client(base_url: &str, body: &'static str) -> (ApiClient, Arc<Recorder>) {
        let recorder = Arc::new(Recorder {
            seen: std::sync::Mutex::new(Vec::new()),
            body,
        });
        let config = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        (ApiClient::new(recorder.clone(), &config), recorder)
    }

    #[tokio::test]
    async fn ping_hits_ping_endpoint() {
        let (client, recorder) = recording_client("http://api.local/", r#"{"status": "pong"}"#);

        let result = client.ping().await;

        assert_eq!(result.message(), "pong");
        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen[0].method, crate::transport::Method::Get);
        assert_eq!(seen[0].url, "http://api.local/api/ping");
    }

    struct Slow;

    #[async_trait::async_trait]
    impl Transport for Slow {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(HttpResponse {
                status: 200,
                body: r#"{"status": "pong"}"#.to_string(),
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_timeout_waits_for_the_reply() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..ApiConfig::default()
        };
        let client = ApiClient::new(Arc::new(Slow), &config);

        assert_eq!(
            client.ping().await,
            ApiOutcome::Accepted {
                message: "pong".to_string()
            }
        );
    }

    #[test]
    fn empty_detail_falls_back_to_status() {
        assert_eq!(outcome(200, r#"{"detail": "", "status": "queued"}"#).message(), "queued");
        assert_eq!(outcome(200, r#"{"detail": null, "status": "queued"}"#).message(), "queued");
    }

    #[tokio::test]
    async fn validate_invite_sends_code_as_query() {
        let (client, recorder) =
            recording_client("http://api.local", r#"{"success": true, "message": "Invite is valid."}"#);

        let result = client.validate_invite("INV-42").await;

        assert!(result.is_success());
        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen[0].url, "http://api.local/api/invite/validate");
        assert_eq!(seen[0].query, vec![("code".to_string(), "INV-42".to_string())]);
        assert!(seen[0].body.is_none());
    }
}
