//! # Services Layer
//!
//! The two components with side effects: the credential file and the
//! network. Everything above them works on plain values.

pub mod credentials;
pub mod http;

// Re-export service types
pub use credentials::{mask_token, TokenStore};
pub use http::{Executor, HttpService};
