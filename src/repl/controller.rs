//! # REPL Controller
//!
//! Reads commands from an input stream, applies them to the session state
//! and writes results to an output stream. The streams and the executor are
//! injected so the whole loop can be driven from tests.

use super::command::Command;
use super::interrupt::write_farewell;
use super::session::SessionState;
use crate::models::{parse_json_body, Method, Outcome, RequestSpec};
use crate::services::{Executor, TokenStore};
use crate::views::ResponseRenderer;
use anyhow::Result;
use std::io::{BufRead, Write};

const PROMPT: &str = "api> ";
const BODY_PROMPT: &str = "Enter JSON body (or press Enter for empty):";

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("token <value>", "Set Bearer token"),
    ("token", "Show current token"),
    ("clear", "Clear saved token"),
    ("GET <url>", "Make GET request"),
    ("POST <url>", "Make POST request (will prompt for body)"),
    ("PUT <url>", "Make PUT request (will prompt for body)"),
    ("DELETE <url>", "Make DELETE request"),
    ("PATCH <url>", "Make PATCH request (will prompt for body)"),
    ("headers", "Toggle showing response headers"),
    ("help", "Show this help"),
    ("quit", "Exit"),
];

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Print the request line (and details when verbose), execute, print the outcome
pub fn run_request<W: Write>(
    executor: &impl Executor,
    renderer: &ResponseRenderer,
    spec: &RequestSpec,
    show_headers: bool,
    verbose: bool,
    output: &mut W,
) -> Result<Outcome> {
    writeln!(output)?;
    writeln!(output, "{}", renderer.request_line(spec))?;
    if verbose {
        writeln!(output, "{}", renderer.request_details(spec))?;
    }
    output.flush()?;

    let outcome = executor.execute(spec);

    writeln!(output)?;
    writeln!(output, "{}", renderer.render(&outcome, show_headers))?;
    Ok(outcome)
}

/// The interactive shell
pub struct ReplController<E: Executor, R: BufRead, W: Write> {
    state: SessionState,
    store: TokenStore,
    executor: E,
    renderer: ResponseRenderer,
    verbose: bool,
    input: R,
    output: W,
}

impl<E: Executor, R: BufRead, W: Write> ReplController<E, R, W> {
    /// Create a controller with injected I/O streams
    pub fn with_io_streams(
        state: SessionState,
        store: TokenStore,
        executor: E,
        renderer: ResponseRenderer,
        input: R,
        output: W,
    ) -> Self {
        Self {
            state,
            store,
            executor,
            renderer,
            verbose: false,
            input,
            output,
        }
    }

    /// Print outgoing headers and body before each request
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
        tracing::debug!("Verbose mode set to: {}", verbose);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Get reference to the output stream (for testing)
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        self.print_banner()?;

        loop {
            write!(self.output, "\n{}", self.renderer.style().bold(PROMPT))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                self.say_goodbye()?;
                break;
            };

            let Some(command) = Command::parse(&line) else {
                continue;
            };
            tracing::debug!("Command: {:?}", command);

            if self.handle_command(command)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply one command
    pub fn handle_command(&mut self, command: Command) -> Result<Flow> {
        let style = self.renderer.style();

        match command {
            Command::Quit => {
                self.say_goodbye()?;
                return Ok(Flow::Quit);
            }
            Command::Help => self.print_help()?,
            Command::Token(Some(value)) => match self.state.set_token(&self.store, &value) {
                Ok(()) => writeln!(self.output, "{}", style.green("✓ Token saved!"))?,
                Err(e) => {
                    tracing::error!("Failed to save token: {}", e);
                    writeln!(self.output, "{}", style.red(&format!("Failed to save token: {e}")))?
                }
            },
            Command::Token(None) => match self.state.masked_token() {
                Some(masked) => {
                    writeln!(self.output, "{} {}", style.green("Current token:"), masked)?
                }
                None => writeln!(self.output, "{}", style.yellow("No token set."))?,
            },
            Command::Clear => match self.state.clear_token(&self.store) {
                Ok(true) => writeln!(self.output, "{}", style.green("✓ Token cleared!"))?,
                Ok(false) => writeln!(self.output, "{}", style.yellow("No token to clear."))?,
                Err(e) => {
                    tracing::error!("Failed to clear token: {}", e);
                    writeln!(self.output, "{}", style.red(&format!("Failed to clear token: {e}")))?
                }
            },
            Command::Headers => {
                let state = if self.state.toggle_headers() { "ON" } else { "OFF" };
                writeln!(self.output, "{}", style.green(&format!("Headers display: {state}")))?;
            }
            Command::MissingUrl(_) => {
                writeln!(self.output, "{}", style.red("Please provide a URL"))?;
            }
            Command::Request { method, target } => self.handle_request(method, &target)?,
            Command::Unknown(_) => writeln!(
                self.output,
                "{}",
                style.red("Unknown command. Type 'help' for available commands.")
            )?,
        }

        Ok(Flow::Continue)
    }

    fn handle_request(&mut self, method: Method, target: &str) -> Result<()> {
        let mut body = None;
        if method.accepts_body() {
            let text = self.prompt_body()?;
            if !text.is_empty() {
                match parse_json_body(&text) {
                    Ok(value) => body = Some(value),
                    Err(e) => {
                        writeln!(self.output, "{}", self.renderer.style().red(&e.to_string()))?;
                        return Ok(());
                    }
                }
            }
        }

        let spec = self.state.request(method, target, body);
        run_request(
            &self.executor,
            &self.renderer,
            &spec,
            self.state.show_headers(),
            self.verbose,
            &mut self.output,
        )?;
        Ok(())
    }

    /// Ask for one line of JSON, returned trimmed. Blank means no body.
    fn prompt_body(&mut self) -> Result<String> {
        writeln!(self.output, "{}", self.renderer.style().cyan(BODY_PROMPT))?;
        self.output.flush()?;

        let line = self.read_line()?.unwrap_or_default();
        Ok(line.trim().to_string())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print_banner(&mut self) -> Result<()> {
        let style = self.renderer.style();
        let title = format!("API Testing Tool v{}", env!("CARGO_PKG_VERSION"));
        let border = "═".repeat(38);
        writeln!(self.output)?;
        writeln!(self.output, "{}", style.bold(&style.blue(&format!("╔{border}╗"))))?;
        writeln!(self.output, "{}", style.bold(&style.blue(&format!("║{title:^38}║"))))?;
        writeln!(self.output, "{}", style.bold(&style.blue(&format!("╚{border}╝"))))?;
        writeln!(self.output)?;

        match self.state.masked_token() {
            Some(masked) => writeln!(self.output, "{} {}", style.green("✓ Token loaded:"), masked)?,
            None => writeln!(
                self.output,
                "{}",
                style.yellow("No token set. Use 'token <your-token>' to set one.")
            )?,
        }

        self.print_help()
    }

    fn print_help(&mut self) -> Result<()> {
        let style = self.renderer.style();
        writeln!(self.output)?;
        writeln!(self.output, "{}", style.bold("Commands:"))?;
        for (usage, description) in HELP_ENTRIES {
            writeln!(self.output, "  {} - {}", style.cyan(&format!("{usage:<16}")), description)?;
        }
        Ok(())
    }

    fn say_goodbye(&mut self) -> Result<()> {
        write_farewell(&mut self.output, self.renderer.style())?;
        Ok(())
    }
}
