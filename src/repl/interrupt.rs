//! # Interrupt Handling
//!
//! Ctrl-C ends the shell the same way `quit` does: with a farewell line and
//! a zero exit status.

use crate::views::Style;
use std::io::{self, Write};
use std::thread::JoinHandle;

pub const FAREWELL: &str = "Goodbye!";

/// Write the farewell line
pub fn write_farewell<W: Write>(output: &mut W, style: Style) -> io::Result<()> {
    writeln!(output, "{}", style.yellow(FAREWELL))?;
    output.flush()
}

/// Farewell after an interrupt. The cursor is still on the prompt line.
pub fn write_interrupted<W: Write>(output: &mut W, style: Style) -> io::Result<()> {
    writeln!(output)?;
    write_farewell(output, style)
}

/// Wait for Ctrl-C on a background thread and call `on_interrupt` when it arrives
pub fn spawn_interrupt_watcher<F>(on_interrupt: F) -> io::Result<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("interrupt-watcher".to_string())
        .spawn(move || match runtime.block_on(tokio::signal::ctrl_c()) {
            Ok(()) => {
                tracing::debug!("Interrupt received, leaving the shell");
                on_interrupt();
            }
            Err(e) => tracing::warn!("Cannot listen for Ctrl-C: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_should_end_prompt_line_then_say_goodbye() {
        let mut output = Vec::new();
        write_interrupted(&mut output, Style::plain()).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "\nGoodbye!\n");
    }

    #[test]
    fn farewell_should_be_colored_when_style_enabled() {
        let mut output = Vec::new();
        write_farewell(&mut output, Style::new(true)).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\x1b[93mGoodbye!\x1b[0m\n"
        );
    }
}
