//! HTTP submission of validated form data.
//!
//! The [`Submitter`] issues exactly one request per call through a
//! [`Transport`] and classifies what came back:
//!
//! ```text
//! no response                    -> TransportError
//! 2xx, SuccessBody::Optional     -> Ok(body.message?)
//! 2xx, SuccessBody::Json         -> Ok(body.message?), TransportError if not JSON
//! 2xx, SuccessBody::Ignore       -> Ok(None)
//! non-2xx, ErrorBody::Parse      -> DomainError(body.message or fallback)
//! non-2xx, ErrorBody::Fixed      -> DomainError(fixed message)
//! ```
//!
//! It never retries and never touches form state.

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::TransportFailure;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const DEFAULT_ERROR_FALLBACK: &str = "Something went wrong!";

/// Every form on the site posts; the enum keeps the wire method explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "POST",
        }
    }
}

/// How a successful response's body is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessBody {
    /// Use the JSON `message` field when there is one
    #[default]
    Optional,
    /// The body must be JSON; anything else counts as no usable response
    Json,
    /// Do not read the body; the form's own success message is shown
    Ignore,
}

/// How a failed response's body is turned into a banner message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorBody {
    /// Read the JSON `message` field, else use `fallback`
    Parse { fallback: String },
    /// Do not read the body; always show this message
    Fixed(String),
}

/// Where and how a form is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    #[serde(default)]
    pub success_body: SuccessBody,
    pub error_body: ErrorBody,
}

impl Endpoint {
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            success_body: SuccessBody::Optional,
            error_body: ErrorBody::Parse {
                fallback: DEFAULT_ERROR_FALLBACK.to_string(),
            },
        }
    }

    pub fn success_body(mut self, success_body: SuccessBody) -> Self {
        self.success_body = success_body;
        self
    }

    pub fn error_body(mut self, error_body: ErrorBody) -> Self {
        self.error_body = error_body;
        self
    }

    /// Join `path` onto `base`, tolerating a trailing slash on the base.
    pub fn url(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        if self.path.starts_with('/') {
            format!("{}{}", base, self.path)
        } else {
            format!("{}/{}", base, self.path)
        }
    }
}

/// JSON object sent as the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRequest(Map<String, Value>);

impl SubmissionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String, TransportFailure> {
        serde_json::to_string(&self.0).map_err(|e| TransportFailure::Encode(e.to_string()))
    }
}

/// Outcome of one submission, before it is applied to form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Success status; the server's `message`, if it sent one
    Ok(Option<String>),
    /// Failure status with a displayable message
    DomainError(String),
    /// No response was received
    TransportError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Same range as `fetch`'s `response.ok`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Non-empty string `message` field of a JSON body.
    pub fn message(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        value
            .get("message")?
            .as_str()
            .filter(|m| !m.is_empty())
            .map(str::to_owned)
    }

    pub fn is_json(&self) -> bool {
        serde_json::from_str::<Value>(&self.body).is_ok()
    }
}

/// Performs one HTTP exchange. Futures need not be `Send`; browser
/// transports run on the single-threaded executor.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportFailure>>;
}

impl<T: Transport> Transport for std::rc::Rc<T> {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportFailure>> {
        (**self).send(request)
    }
}

#[derive(Debug, Clone)]
pub struct Submitter<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> Submitter<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `body` to `endpoint`. Exactly one call to the transport.
    pub async fn submit(&self, endpoint: &Endpoint, body: &SubmissionRequest) -> SubmissionResult {
        let url = endpoint.url(&self.base_url);
        let payload = match body.to_json() {
            Ok(payload) => payload,
            Err(e) => {
                warn!(%url, error = %e, "request body could not be encoded");
                return SubmissionResult::TransportError;
            }
        };

        let request = HttpRequest {
            method: endpoint.method,
            url: url.clone(),
            headers: vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())],
            body: payload,
        };

        debug!(method = endpoint.method.as_str(), %url, "sending form");
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%url, error = %e, "form submission failed in transport");
                return SubmissionResult::TransportError;
            }
        };
        info!(%url, status = response.status, "form submission answered");

        if response.is_success() {
            return match endpoint.success_body {
                SuccessBody::Optional => SubmissionResult::Ok(response.message()),
                SuccessBody::Json if response.is_json() => SubmissionResult::Ok(response.message()),
                SuccessBody::Json => {
                    warn!(%url, status = response.status, "success response was not JSON");
                    SubmissionResult::TransportError
                }
                SuccessBody::Ignore => SubmissionResult::Ok(None),
            };
        }

        let message = match &endpoint.error_body {
            ErrorBody::Parse { fallback } => response.message().unwrap_or_else(|| fallback.clone()),
            ErrorBody::Fixed(message) => message.clone(),
        };
        SubmissionResult::DomainError(message)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted in-memory transport for tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, Default)]
    pub struct ScriptedTransport {
        replies: Rc<RefCell<VecDeque<Result<HttpResponse, TransportFailure>>>>,
        sent: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl ScriptedTransport {
        pub fn reply(self, status: u16, body: &str) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Ok(HttpResponse::new(status, body)));
            self
        }

        pub fn fail(self, failure: TransportFailure) -> Self {
            self.replies.borrow_mut().push_back(Err(failure));
            self
        }

        pub fn sent(&self) -> Vec<HttpRequest> {
            self.sent.borrow().clone()
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportFailure::Network("no scripted reply".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::testing::ScriptedTransport;
    use super::*;
    use serde_json::json;

    fn body() -> SubmissionRequest {
        let mut body = SubmissionRequest::new();
        body.insert("email", json!("jane@x.com"));
        body
    }

    #[test]
    fn url_joining() {
        let ep = Endpoint::post("/contact");
        assert_eq!(ep.url(""), "/contact");
        assert_eq!(ep.url("https://api.example.com/"), "https://api.example.com/contact");
        assert_eq!(Endpoint::post("login").url("/v1"), "/v1/login");
    }

    #[test]
    fn message_extraction() {
        assert_eq!(HttpResponse::new(200, r#"{"message":"ok"}"#).message().as_deref(), Some("ok"));
        assert_eq!(HttpResponse::new(200, r#"{"message":""}"#).message(), None);
        assert_eq!(HttpResponse::new(200, r#"{"message":3}"#).message(), None);
        assert_eq!(HttpResponse::new(500, "<html>").message(), None);
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
    }

    #[tokio::test]
    async fn success_reads_message_and_sends_json() {
        let transport = ScriptedTransport::default().reply(200, r#"{"message":"ok"}"#);
        let submitter = Submitter::new(transport.clone(), "");

        let result = submitter.submit(&Endpoint::post("/register"), &body()).await;
        assert_eq!(result, SubmissionResult::Ok(Some("ok".into())));

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, "/register");
        assert_eq!(
            sent[0].headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        let sent_body: Value = serde_json::from_str(&sent[0].body).unwrap();
        assert_eq!(sent_body, json!({"email": "jane@x.com"}));
    }

    #[tokio::test]
    async fn success_without_body_has_no_message() {
        let transport = ScriptedTransport::default().reply(201, "");
        let submitter = Submitter::new(transport, "");
        let result = submitter.submit(&Endpoint::post("/contact"), &body()).await;
        assert_eq!(result, SubmissionResult::Ok(None));
    }

    #[tokio::test]
    async fn failure_uses_server_message_or_fallback() {
        let transport = ScriptedTransport::default()
            .reply(401, r#"{"message":"Invalid credentials"}"#)
            .reply(500, "Internal Server Error");
        let submitter = Submitter::new(transport, "");
        let ep = Endpoint::post("/login");

        assert_eq!(
            submitter.submit(&ep, &body()).await,
            SubmissionResult::DomainError("Invalid credentials".into())
        );
        assert_eq!(
            submitter.submit(&ep, &body()).await,
            SubmissionResult::DomainError("Something went wrong!".into())
        );
    }

    #[tokio::test]
    async fn fixed_error_body_ignores_server_message() {
        let transport = ScriptedTransport::default().reply(402, r#"{"message":"card declined"}"#);
        let submitter = Submitter::new(transport, "");
        let ep = Endpoint::post("/api/payment")
            .error_body(ErrorBody::Fixed("Payment failed. Please try again.".into()));
        assert_eq!(
            submitter.submit(&ep, &body()).await,
            SubmissionResult::DomainError("Payment failed. Please try again.".into())
        );
    }

    #[tokio::test]
    async fn ignored_success_body_drops_server_message() {
        let transport = ScriptedTransport::default().reply(200, r#"{"message":"charged"}"#);
        let submitter = Submitter::new(transport, "");
        let ep = Endpoint::post("/api/payment").success_body(SuccessBody::Ignore);
        assert_eq!(submitter.submit(&ep, &body()).await, SubmissionResult::Ok(None));
    }

    #[tokio::test]
    async fn json_success_body_rejects_other_payloads() {
        let transport = ScriptedTransport::default()
            .reply(200, "<html>proxy page</html>")
            .reply(200, "")
            .reply(200, r#"{"message":"Check your inbox"}"#)
            .reply(200, "{}");
        let submitter = Submitter::new(transport, "");
        let ep = Endpoint::post("/api/forgot-password").success_body(SuccessBody::Json);

        assert_eq!(submitter.submit(&ep, &body()).await, SubmissionResult::TransportError);
        assert_eq!(submitter.submit(&ep, &body()).await, SubmissionResult::TransportError);
        assert_eq!(
            submitter.submit(&ep, &body()).await,
            SubmissionResult::Ok(Some("Check your inbox".into()))
        );
        assert_eq!(submitter.submit(&ep, &body()).await, SubmissionResult::Ok(None));
    }

    #[tokio::test]
    async fn transport_failures_collapse() {
        let transport = ScriptedTransport::default()
            .fail(TransportFailure::Network("dns".into()))
            .fail(TransportFailure::TimedOut(Duration::from_secs(10)));
        let submitter = Submitter::new(transport.clone(), "");
        let ep = Endpoint::post("/contact");

        assert_eq!(submitter.submit(&ep, &body()).await, SubmissionResult::TransportError);
        assert_eq!(submitter.submit(&ep, &body()).await, SubmissionResult::TransportError);
        assert_eq!(transport.sent().len(), 2);
    }
}
