//! Response model
//!
//! The result of attempting one request. Exactly one [`Outcome`] is produced
//! per request and handed to the renderer.

/// Headers in the order the transport reported them
pub type ResponseHeaders = Vec<(String, String)>;

/// Visual treatment of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    /// 2xx
    Success,
    /// 3xx
    Caution,
    /// Everything else, including transport failures
    Failure,
}

impl StatusBucket {
    pub fn from_status(status: Option<u16>) -> Self {
        match status.map(ResponseStatus::new) {
            Some(status) if status.is_success() => StatusBucket::Success,
            Some(status) if status.is_redirect() => StatusBucket::Caution,
            _ => StatusBucket::Failure,
        }
    }
}

/// HTTP status information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseStatus {
    pub code: u16,
}

impl ResponseStatus {
    pub fn new(code: u16) -> Self {
        Self { code }
    }

    /// Check if the status indicates success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Check if the status indicates redirection (3xx)
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.code)
    }

    /// Canonical reason phrase, empty for unknown codes
    pub fn reason(&self) -> &'static str {
        reqwest::StatusCode::from_u16(self.code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
    }

    /// Get status as string (e.g., "200 OK")
    pub fn as_string(&self) -> String {
        let reason = self.reason();
        if reason.is_empty() {
            self.code.to_string()
        } else {
            format!("{} {}", self.code, reason)
        }
    }
}

/// Tagged result of one request
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A 2xx response
    Success {
        status: u16,
        headers: ResponseHeaders,
        body: String,
    },
    /// A well-formed response with any non-2xx status
    HttpError {
        status: u16,
        headers: ResponseHeaders,
        body: String,
        message: String,
    },
    /// No HTTP response was obtained
    TransportError { message: String },
}

impl Outcome {
    /// Classify a received response by its status code
    pub fn from_response(status: u16, headers: ResponseHeaders, body: String) -> Self {
        let response_status = ResponseStatus::new(status);
        if response_status.is_success() {
            Outcome::Success {
                status,
                headers,
                body,
            }
        } else {
            Outcome::HttpError {
                status,
                headers,
                body,
                message: format!("HTTP Error {}: {}", status, response_status.reason()),
            }
        }
    }

    pub fn transport_error(message: impl Into<String>) -> Self {
        Outcome::TransportError {
            message: message.into(),
        }
    }

    /// Status code, absent for transport failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Success { status, .. } | Outcome::HttpError { status, .. } => Some(*status),
            Outcome::TransportError { .. } => None,
        }
    }

    pub fn headers(&self) -> &[(String, String)] {
        match self {
            Outcome::Success { headers, .. } | Outcome::HttpError { headers, .. } => headers,
            Outcome::TransportError { .. } => &[],
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Outcome::Success { body, .. } | Outcome::HttpError { body, .. } => body,
            Outcome::TransportError { .. } => "",
        }
    }

    /// Error message, absent on success
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::HttpError { message, .. } | Outcome::TransportError { message } => {
                Some(message)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(self, Outcome::TransportError { .. })
    }

    pub fn bucket(&self) -> StatusBucket {
        StatusBucket::from_status(self.status())
    }
}
