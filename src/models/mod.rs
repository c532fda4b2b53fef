//! # Models
//!
//! Plain data passed between the executor, the renderer and the shell.

pub mod request_model;
pub mod response_model;

pub use request_model::{normalize_url, parse_json_body, Method, RequestSpec};
pub use response_model::{Outcome, ResponseHeaders, ResponseStatus, StatusBucket};
