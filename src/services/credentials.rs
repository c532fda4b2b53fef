//! # Credential Store
//!
//! Persists a single bearer token as the raw contents of one file.
//! There is no locking; two processes sharing a file may race.

use crate::error::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Tokens longer than this are shown partially, shorter ones fully masked
const MASK_THRESHOLD: usize = 12;
const MASK_PREFIX_LEN: usize = 8;
const MASK_SUFFIX_LEN: usize = 4;
const FULL_MASK: &str = "****";

/// Redact a token for display: `first8...last4`, or `****` for short tokens
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > MASK_THRESHOLD {
        let head: String = chars[..MASK_PREFIX_LEN].iter().collect();
        let tail: String = chars[chars.len() - MASK_SUFFIX_LEN..].iter().collect();
        format!("{head}...{tail}")
    } else {
        FULL_MASK.to_string()
    }
}

/// File-backed storage for the bearer token
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token. Missing, empty and unreadable files all yield `None`.
    pub fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    tracing::debug!("Token file {} is empty", self.path.display());
                    None
                } else {
                    tracing::debug!("Token loaded from {}", self.path.display());
                    Some(token.to_string())
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No token file at {}", self.path.display());
                None
            }
            Err(e) => {
                tracing::warn!("Cannot read token file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Overwrite the stored token with `token` (trimmed)
    pub fn save(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::InvalidInput("Token must not be empty".to_string()));
        }

        std::fs::write(&self.path, token).map_err(|e| Error::io(&self.path, e))?;
        tracing::info!(
            "Token {} saved to {}",
            mask_token(token),
            self.path.display()
        );
        Ok(())
    }

    /// Delete the stored token. Returns whether a file was actually removed.
    pub fn clear(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!("Token file {} removed", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io(&self.path, e)),
        }
    }
}
