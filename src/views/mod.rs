//! # Views
//!
//! Text formatting for the terminal. Nothing here writes to stdout.

pub mod ansi_escape_codes;
pub mod response_renderer;

pub use ansi_escape_codes::Style;
pub use response_renderer::{format_body, BodySection, ResponseRenderer, BODY_CHAR_LIMIT};
