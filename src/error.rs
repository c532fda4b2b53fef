//! # Error Types
//!
//! Failures that are reported back to the caller. Network failures are not
//! here: they are data, carried by [`crate::models::Outcome::TransportError`].

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The credential file (or another local file) could not be read or written
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User-supplied input was rejected before any request was attempted
    #[error("{0}")]
    InvalidInput(String),

    /// A method name outside GET/POST/PUT/DELETE/PATCH
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// The settings file exists but holds a value that cannot be used
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_should_mention_path_and_cause() {
        let err = Error::io(
            "/tmp/.api_token",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(err.to_string(), "/tmp/.api_token: permission denied");
    }

    #[test]
    fn invalid_input_should_display_message_verbatim() {
        let err = Error::InvalidInput("Invalid JSON: expected value".to_string());
        assert_eq!(err.to_string(), "Invalid JSON: expected value");
    }
}
