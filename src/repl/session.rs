//! # Session State
//!
//! The in-memory state of one shell session: the active token and whether
//! response headers are displayed. The controller owns it and hands it to
//! each command handler.

use crate::error::Result;
use crate::models::{Method, RequestSpec};
use crate::services::{mask_token, TokenStore};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
    show_headers: bool,
}

impl SessionState {
    pub fn new(token: Option<String>, show_headers: bool) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
            show_headers,
        }
    }

    /// Start a session with whatever token the store currently holds
    pub fn from_store(store: &TokenStore, show_headers: bool) -> Self {
        Self::new(store.load(), show_headers)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn masked_token(&self) -> Option<String> {
        self.token.as_deref().map(mask_token)
    }

    pub fn show_headers(&self) -> bool {
        self.show_headers
    }

    /// Persist `value` and make it the active token. On failure the
    /// previous token stays active.
    pub fn set_token(&mut self, store: &TokenStore, value: &str) -> Result<()> {
        store.save(value)?;
        self.token = Some(value.trim().to_string());
        Ok(())
    }

    /// Remove the persisted token. Returns whether anything was removed.
    pub fn clear_token(&mut self, store: &TokenStore) -> Result<bool> {
        let removed = store.clear()?;
        self.token = None;
        Ok(removed)
    }

    /// Flip header display, returning the new setting
    pub fn toggle_headers(&mut self) -> bool {
        self.show_headers = !self.show_headers;
        self.show_headers
    }

    /// Build a request authenticated with the active token
    pub fn request(&self, method: Method, target: &str, body: Option<Value>) -> RequestSpec {
        let spec = RequestSpec::new(method, target).with_token(self.token());
        match body {
            Some(body) => spec.with_body(body),
            None => spec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TokenStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join(".api_token"));
        (dir, store)
    }

    #[test]
    fn session_should_start_from_stored_token() {
        let (_dir, store) = create_test_store();
        store.save("stored-token-123").unwrap();
        let state = SessionState::from_store(&store, true);
        assert_eq!(state.token(), Some("stored-token-123"));
        assert_eq!(state.masked_token().as_deref(), Some("stored-t...-123"));
    }

    #[test]
    fn blank_token_should_count_as_absent() {
        let state = SessionState::new(Some("  ".to_string()), true);
        assert_eq!(state.token(), None);
    }

    #[test]
    fn set_token_should_persist_and_activate() {
        let (_dir, store) = create_test_store();
        let mut state = SessionState::new(None, true);
        state.set_token(&store, "new-token").unwrap();
        assert_eq!(state.token(), Some("new-token"));
        assert_eq!(store.load().as_deref(), Some("new-token"));
    }

    #[test]
    fn failed_save_should_keep_previous_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("missing").join(".api_token"));
        let mut state = SessionState::new(Some("old".to_string()), true);
        assert!(state.set_token(&store, "new").is_err());
        assert_eq!(state.token(), Some("old"));
    }

    #[test]
    fn clear_token_should_drop_active_token() {
        let (_dir, store) = create_test_store();
        let mut state = SessionState::new(None, true);
        state.set_token(&store, "tok").unwrap();
        assert!(state.clear_token(&store).unwrap());
        assert_eq!(state.token(), None);
        assert!(!state.clear_token(&store).unwrap());
    }

    #[test]
    fn toggle_headers_should_flip() {
        let mut state = SessionState::new(None, true);
        assert!(!state.toggle_headers());
        assert!(state.toggle_headers());
    }

    #[test]
    fn request_should_carry_token_and_normalized_url() {
        let state = SessionState::new(Some("tok".to_string()), true);
        let spec = state.request(Method::Put, "example.com/x", Some(serde_json::json!([1])));
        assert_eq!(spec.url(), "https://example.com/x");
        assert_eq!(spec.token(), Some("tok"));
        assert_eq!(spec.body_text().as_deref(), Some("[1]"));
    }
}
