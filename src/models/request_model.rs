//! Request model
//!
//! An immutable description of one HTTP request: method, normalized URL,
//! optional JSON body and caller-supplied header overrides. The executor
//! turns it into a wire request.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Header sent on every request unless the caller overrides it
pub const DEFAULT_CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

/// HTTP methods the client can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub const ALL: [Method; 5] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }

    /// Whether a request of this method may carry a JSON body
    pub fn accepts_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Case-insensitive: `get`, `Get` and `GET` are all [`Method::Get`]
    fn from_str(s: &str) -> Result<Self> {
        let upper = s.to_uppercase();
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == upper)
            .ok_or(Error::UnsupportedMethod(s.to_string()))
    }
}

/// Prepend `https://` unless the target already names an http(s) scheme
pub fn normalize_url(target: &str) -> String {
    let target = target.trim();
    if target.starts_with("http://") || target.starts_with("https://") {
        target.to_string()
    } else {
        format!("https://{target}")
    }
}

/// Parse a JSON body line typed by the user
pub fn parse_json_body(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| Error::InvalidInput(format!("Invalid JSON: {e}")))
}

/// One HTTP request to be executed
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    method: Method,
    url: String,
    token: Option<String>,
    body: Option<Value>,
    headers: Vec<(String, String)>,
}

impl RequestSpec {
    /// Create a request for `target`, normalizing the URL scheme
    pub fn new(method: Method, target: &str) -> Self {
        Self {
            method,
            url: normalize_url(target),
            token: None,
            body: None,
            headers: Vec::new(),
        }
    }

    /// Authenticate with a bearer token. Blank tokens count as no token.
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        self
    }

    /// Attach a JSON body. Ignored for methods that never carry one.
    pub fn with_body(mut self, body: Value) -> Self {
        if self.method.accepts_body() {
            self.body = Some(body);
        } else {
            tracing::debug!("Dropping body supplied for {} request", self.method);
        }
        self
    }

    /// Add a header override. Applied after the defaults, last write wins.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Body serialized to compact JSON text, if any
    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(Value::to_string)
    }

    /// Headers actually sent: `Content-Type`, then `Authorization` when a
    /// token is present, then the overrides. Names match case-sensitively.
    pub fn effective_headers(&self) -> Vec<(String, String)> {
        let mut merged = vec![(
            DEFAULT_CONTENT_TYPE.0.to_string(),
            DEFAULT_CONTENT_TYPE.1.to_string(),
        )];
        if let Some(token) = &self.token {
            merged.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        for (name, value) in &self.headers {
            match merged.iter_mut().find(|(existing, _)| existing == name) {
                Some(slot) => slot.1 = value.clone(),
                None => merged.push((name.clone(), value.clone())),
            }
        }
        merged
    }
}
