//! # REPL Module
//!
//! The interactive shell around the request/response pipeline:
//!
//! - **command**: one input line parsed into a [`Command`]
//! - **session**: the token and header toggle for the lifetime of a session
//! - **controller**: the read-eval-print loop over injected streams
//! - **interrupt**: Ctrl-C ends the shell with the same farewell as `quit`

pub mod command;
pub mod controller;
pub mod interrupt;
pub mod session;

pub use command::Command;
pub use controller::{run_request, Flow, ReplController};
pub use interrupt::spawn_interrupt_watcher;
pub use session::SessionState;
