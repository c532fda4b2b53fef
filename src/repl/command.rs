//! # Shell Commands
//!
//! One line of user input parsed into a closed set of commands. Parsing is
//! pure so it can be tested without a terminal or a network.

use crate::models::Method;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `quit`, `exit`, `q`
    Quit,
    /// `help`, `h`, `?`
    Help,
    /// `token <value>` sets, bare `token` shows
    Token(Option<String>),
    /// `clear`
    Clear,
    /// `headers`
    Headers,
    /// `METHOD <url>`, or a bare URL as an implicit GET
    Request { method: Method, target: String },
    /// A method word with nothing after it
    MissingUrl(Method),
    /// Anything else
    Unknown(String),
}

impl Command {
    /// Parse one input line. Blank input yields `None`.
    pub fn parse(input: &str) -> Option<Command> {
        let line = input.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        let command = match word.to_uppercase().as_str() {
            "QUIT" | "EXIT" | "Q" => Command::Quit,
            "HELP" | "H" | "?" => Command::Help,
            "TOKEN" => Command::Token(argument),
            "CLEAR" => Command::Clear,
            "HEADERS" => Command::Headers,
            _ => match word.parse::<Method>() {
                Ok(method) => match argument {
                    Some(target) => Command::Request { method, target },
                    None => Command::MissingUrl(method),
                },
                Err(_) if looks_like_url(line) => Command::Request {
                    method: Method::Get,
                    target: line.to_string(),
                },
                Err(_) => Command::Unknown(line.to_string()),
            },
        };
        Some(command)
    }
}

/// Bare text is treated as a URL if it names a scheme or contains a dot
pub fn looks_like_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://") || text.contains('.')
}
