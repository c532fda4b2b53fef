//! # HTTP Service
//!
//! Executes a [`RequestSpec`] with a blocking reqwest client and classifies
//! whatever happens into an [`Outcome`]. Nothing in here returns an error:
//! every network condition ends up as a value.

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::models::{Method, Outcome, RequestSpec, ResponseHeaders};
use reqwest::blocking::Client;
use reqwest::Url;
use std::error::Error as StdError;
use std::time::{Duration, Instant};

/// Anything that can turn a request into an outcome
pub trait Executor {
    fn execute(&self, spec: &RequestSpec) -> Outcome;
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
            Method::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Service for executing HTTP requests
pub struct HttpService {
    /// The underlying HTTP client, absent if it could not be built
    client: Option<Client>,
    timeout: Duration,
}

impl HttpService {
    /// Create a new HttpService whose requests give up after `timeout_secs`
    pub fn new(timeout_secs: u64) -> Self {
        let timeout = Duration::from_secs(timeout_secs);
        tracing::debug!("Creating HttpClient with {}s timeout", timeout_secs);

        let client = match Client::builder().timeout(timeout).build() {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Failed to create HTTP client: {}", error_chain(&e));
                None
            }
        };

        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check if HTTP client is available
    pub fn is_available(&self) -> bool {
        self.client.is_some()
    }

    fn describe_error(&self, e: &reqwest::Error) -> String {
        if e.is_timeout() {
            format!("Request timed out after {}s", self.timeout.as_secs())
        } else if e.is_connect() {
            format!("Connection failed: {}", root_cause(e))
        } else if e.is_builder() {
            format!("Invalid request: {}", error_chain(e))
        } else {
            error_chain(e)
        }
    }
}

impl Default for HttpService {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_SECS)
    }
}

impl Executor for HttpService {
    fn execute(&self, spec: &RequestSpec) -> Outcome {
        let Some(client) = &self.client else {
            return Outcome::transport_error("HTTP client not configured");
        };

        let url = match Url::parse(spec.url()) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Rejected malformed URL '{}': {}", spec.url(), e);
                return Outcome::transport_error(format!("Invalid URL: {e}"));
            }
        };

        let mut builder = client.request(spec.method().into(), url);
        for (name, value) in spec.effective_headers() {
            builder = builder.header(name, value);
        }
        if let Some(body) = spec.body_text() {
            builder = builder.body(body);
        }

        tracing::debug!("{} {}", spec.method(), spec.url());
        let start_time = Instant::now();

        let response = match builder.send() {
            Ok(response) => response,
            Err(e) => {
                let message = self.describe_error(&e);
                tracing::warn!("HTTP request failed: {}", message);
                return Outcome::transport_error(message);
            }
        };

        let status = response.status().as_u16();
        let headers: ResponseHeaders = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                let message = format!("Failed to read response body: {}", self.describe_error(&e));
                tracing::warn!("{}", message);
                return Outcome::transport_error(message);
            }
        };

        tracing::debug!(
            "Response received: status={}, duration={}ms, body_bytes={}",
            status,
            start_time.elapsed().as_millis(),
            body.len()
        );

        Outcome::from_response(status, headers, body)
    }
}

/// The error followed by each of its causes, most specific last
fn error_chain(e: &(dyn StdError + 'static)) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// The innermost cause, usually the OS-level reason such as "Connection refused"
fn root_cause(e: &(dyn StdError + 'static)) -> String {
    let mut current = e;
    while let Some(cause) = current.source() {
        current = cause;
    }
    current.to_string()
}
