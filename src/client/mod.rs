//! Client layer: signs requests, tracks endpoint health and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use http::header::InvalidHeaderValue;
use http::{HeaderMap, HeaderValue};
use log::{debug, warn};
use serde::Serialize;

use crate::domain::{
    Credentials, DEFAULTS, EndpointState, FailoverOutcome, GetToken, Host, Options,
    SUCCESS_CODE, SendCode, SendCodeResponse, TokenResponse, ValidationError,
};
use crate::transport::{
    DEFAULT_USER_AGENT, GET_TOKEN_PATH, SEND_CODE_PATH, Signature, decode_code_result,
    decode_get_token_json_response, decode_send_code_json_response, encode_get_token_form,
    encode_send_code_form, fill_json_content_type, fill_signed_headers,
};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq)]
enum HttpBody {
    Form(Vec<(String, String)>),
    Json(String),
}

#[derive(Debug, Clone)]
struct HttpRequest {
    url: String,
    headers: HeaderMap,
    body: HttpBody,
    timeout: Duration,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

/// HTTP collaborator.
///
/// `Err` means the round trip never completed (DNS, connect, timeout, broken body).
/// Any response that arrived, whatever its status, is `Ok`.
trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let builder = self
                .client
                .post(&request.url)
                .headers(request.headers)
                .timeout(request.timeout);
            let builder = match request.body {
                HttpBody::Form(params) => builder.form(&params),
                HttpBody::Json(body) => builder.body(body),
            };
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`RongCloud`].
///
/// Only [`RongCloudError::Transport`] counts towards endpoint failover; see
/// [`RongCloudError::is_transport`].
pub enum RongCloudError {
    /// The request did not complete a round trip (DNS, TLS, connect, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// RongCloud answered with a `code` other than 200.
    #[error("API error: {code} {error_message:?}")]
    Api {
        code: i32,
        error_message: Option<String>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A JSON request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// A header value (for example a custom user agent) is not valid HTTP.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),

    /// One of the domain constructors or setters rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl RongCloudError {
    /// Whether this error is a network-level failure rather than a server answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`RongCloud`].
pub struct RongCloudBuilder {
    credentials: Credentials,
    options: Option<Options>,
    user_agent: Option<String>,
}

impl RongCloudBuilder {
    /// Create a builder that uses the built-in defaults.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            options: None,
            user_agent: None,
        }
    }

    /// Replace all overrides at once; `None` restores the defaults.
    pub fn options(mut self, options: Option<Options>) -> Self {
        self.options = options;
        self
    }

    /// Override the API and SMS base URLs.
    ///
    /// The two are only honored as a pair: if either is empty, both defaults are used.
    pub fn api_urls(mut self, api_url: impl Into<String>, sms_url: impl Into<String>) -> Self {
        let options = self.options.get_or_insert_with(Options::default);
        options.api_url = api_url.into();
        options.sms_url = sms_url.into();
        self
    }

    /// Per-request timeout handed to the HTTP client. Zero means the default (10s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.get_or_insert_with(Options::default).timeout = timeout;
        self
    }

    /// Consecutive transport failures before switching API hosts; `0` disables failover.
    pub fn failover_threshold(mut self, threshold: u32) -> Self {
        self.options
            .get_or_insert_with(Options::default)
            .failover_threshold = Some(threshold);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`RongCloud`].
    pub fn build(self) -> Result<RongCloud, RongCloudError> {
        let resolved = Options::resolve(self.options, &DEFAULTS)?;
        let user_agent = match self.user_agent {
            Some(user_agent) => HeaderValue::from_str(&user_agent)?,
            None => HeaderValue::from_static(DEFAULT_USER_AGENT),
        };

        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| RongCloudError::Transport(Box::new(err)))?;

        Ok(RongCloud {
            credentials: self.credentials,
            timeout: resolved.timeout,
            user_agent,
            endpoints: Arc::new(Mutex::new(EndpointState::new(&resolved, &DEFAULTS))),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// RongCloud server API client.
///
/// Every call is signed with a fresh nonce/timestamp pair. Consecutive transport failures
/// are counted, and once the configured threshold is reached the client switches the API host
/// (`api-cn` ⇄ `api2-cn`). The count only restarts after a switch.
///
/// Clones share endpoint state; updates go through a mutex so concurrent calls do not lose
/// failure counts.
pub struct RongCloud {
    credentials: Credentials,
    timeout: Duration,
    user_agent: HeaderValue,
    endpoints: Arc<Mutex<EndpointState>>,
    http: Arc<dyn HttpTransport>,
}

impl RongCloud {
    /// Create a client from raw credentials and optional overrides.
    ///
    /// Without overrides the defaults are `http://api-cn.ronghub.com`,
    /// `http://api.sms.ronghub.com`, a 10 second timeout and failover after 3 failures.
    pub fn new(
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        options: Option<Options>,
    ) -> Result<Self, RongCloudError> {
        RongCloudBuilder::new(Credentials::parse(app_key, app_secret)?)
            .options(options)
            .build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> RongCloudBuilder {
        RongCloudBuilder::new(credentials)
    }

    fn endpoints(&self) -> MutexGuard<'_, EndpointState> {
        self.endpoints
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Currently active API base URL.
    pub fn api_url(&self) -> String {
        self.endpoints().api_url().to_owned()
    }

    /// SMS API base URL.
    pub fn sms_url(&self) -> String {
        self.endpoints().sms_url().to_owned()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Consecutive transport failures seen since the last host switch (starts at 1).
    pub fn failure_count(&self) -> u32 {
        self.endpoints().failures()
    }

    pub fn failover_threshold(&self) -> u32 {
        self.endpoints().threshold()
    }

    /// Change how many consecutive transport failures trigger a host switch.
    ///
    /// `0` disables failover. Negative values are rejected and nothing changes.
    pub fn set_failover_threshold(&self, threshold: i64) -> Result<(), RongCloudError> {
        self.endpoints().set_threshold(threshold)?;
        Ok(())
    }

    /// Fresh nonce, timestamp and signature for one outgoing call.
    pub fn generate_signature(&self) -> Signature {
        Signature::generate(self.credentials.app_secret())
    }

    /// Stamp `App-Key`, `Nonce`, `Timestamp`, `Signature`, a form `Content-Type` and the
    /// `User-Agent` onto `headers`.
    pub fn fill_header(&self, headers: &mut HeaderMap) -> Result<(), RongCloudError> {
        let signature = self.generate_signature();
        fill_signed_headers(
            headers,
            self.credentials.app_key(),
            &signature,
            &self.user_agent,
        )?;
        Ok(())
    }

    /// Feed the outcome of a failed call into failover bookkeeping.
    ///
    /// Anything other than a transport failure is ignored.
    pub fn observe_error(&self, err: &RongCloudError) {
        if !err.is_transport() {
            return;
        }
        let outcome = self.endpoints().record_transport_failure();
        match outcome {
            FailoverOutcome::Disabled => {}
            FailoverOutcome::Counted { failures } => {
                debug!("transport failure recorded, consecutive failures: {failures}");
            }
            FailoverOutcome::Switched { from, to } => {
                warn!("switching RongCloud API host from {from} to {to} after transport failures");
            }
        }
    }

    /// POST form parameters to `path` on `host` and return the raw body of a successful
    /// (`code` 200) response.
    pub async fn post_form(
        &self,
        host: Host,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<String, RongCloudError> {
        self.execute(host, path, HttpBody::Form(params)).await
    }

    /// POST a JSON body to `path` on `host` and return the raw body of a successful
    /// (`code` 200) response.
    pub async fn post_json<T>(
        &self,
        host: Host,
        path: &str,
        body: &T,
    ) -> Result<String, RongCloudError>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body).map_err(RongCloudError::Encode)?;
        self.execute(host, path, HttpBody::Json(body)).await
    }

    /// Register a user and obtain an IM token.
    ///
    /// Errors:
    /// - [`RongCloudError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`RongCloudError::Api`] when RongCloud returns a non-200 `code`.
    pub async fn get_token(&self, request: GetToken) -> Result<TokenResponse, RongCloudError> {
        let body = self
            .post_form(Host::Api, GET_TOKEN_PATH, encode_get_token_form(&request))
            .await?;
        decode_get_token_json_response(&body).map_err(|err| RongCloudError::Parse(Box::new(err)))
    }

    /// Send a verification code SMS through the SMS host.
    pub async fn send_code(&self, request: SendCode) -> Result<SendCodeResponse, RongCloudError> {
        let body = self
            .post_form(Host::Sms, SEND_CODE_PATH, encode_send_code_form(&request))
            .await?;
        decode_send_code_json_response(&body).map_err(|err| RongCloudError::Parse(Box::new(err)))
    }

    async fn execute(
        &self,
        host: Host,
        path: &str,
        body: HttpBody,
    ) -> Result<String, RongCloudError> {
        let url = format!(
            "{}/{}",
            self.endpoints().url(host),
            path.trim_start_matches('/')
        );

        let mut headers = HeaderMap::new();
        self.fill_header(&mut headers)?;
        if matches!(body, HttpBody::Json(_)) {
            fill_json_header(&mut headers);
        }

        debug!("POST {url}");
        let request = HttpRequest {
            url,
            headers,
            body,
            timeout: self.timeout,
        };
        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(err) => {
                let err = RongCloudError::Transport(err);
                self.observe_error(&err);
                return Err(err);
            }
        };

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(RongCloudError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let code = decode_code_result(&response.body)
            .map_err(|err| RongCloudError::Parse(Box::new(err)))?;
        if code.code != SUCCESS_CODE {
            return Err(RongCloudError::Api {
                code: code.code,
                error_message: code.error_message,
            });
        }

        Ok(response.body)
    }
}

/// Set `Content-Type: application/json` for endpoints that take JSON bodies.
///
/// Independent of [`RongCloud::fill_header`]; call it afterwards so it wins over the form
/// content type.
pub fn fill_json_header(headers: &mut HeaderMap) {
    fill_json_content_type(headers);
}
