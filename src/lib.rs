//! # api-tester - Interactive HTTP API Client
//!
//! A small shell for poking at HTTP APIs with a persisted bearer token.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  load   ┌──────────────────┐
//! │  REPL shell  │────────▶│ Credential Store │
//! │              │         └──────────────────┘
//! │ - Commands   │ execute ┌──────────────────┐
//! │ - Session    │────────▶│ Request Executor │──▶ Outcome
//! │   state      │         └──────────────────┘       │
//! │              │ render  ┌──────────────────┐       │
//! │              │◀────────│ Response Renderer│◀──────┘
//! └──────────────┘         └──────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod services;
pub mod views;

// Re-export main types for easy access
pub use error::{Error, Result};
pub use models::{Method, Outcome, RequestSpec};
pub use repl::{Command, ReplController, SessionState};
pub use services::{mask_token, Executor, HttpService, TokenStore};
pub use views::ResponseRenderer;
