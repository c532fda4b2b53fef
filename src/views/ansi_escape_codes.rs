//! ANSI escape code constants for terminal styling
//!
//! Only the attributes and colors the renderer and the shell actually use.

// ============================================================================
// TEXT ATTRIBUTES
// ============================================================================

pub const RESET: &str = "\x1b[0m"; // Reset all attributes
pub const BOLD: &str = "\x1b[1m"; // Bold text

// ============================================================================
// BRIGHT/HIGH INTENSITY FOREGROUND COLORS (90-97)
// ============================================================================

pub const FG_BRIGHT_RED: &str = "\x1b[91m";
pub const FG_BRIGHT_GREEN: &str = "\x1b[92m";
pub const FG_BRIGHT_YELLOW: &str = "\x1b[93m";
pub const FG_BRIGHT_BLUE: &str = "\x1b[94m";
pub const FG_BRIGHT_CYAN: &str = "\x1b[96m";

/// Wraps text in escape codes when enabled, passes it through otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Plain text, no escape codes at all
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(FG_BRIGHT_GREEN, text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(FG_BRIGHT_YELLOW, text)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(FG_BRIGHT_RED, text)
    }

    pub fn blue(&self, text: &str) -> String {
        self.paint(FG_BRIGHT_BLUE, text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint(FG_BRIGHT_CYAN, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_should_not_emit_escape_codes() {
        let style = Style::plain();
        assert_eq!(style.red("x"), "x");
        assert_eq!(style.bold("x"), "x");
    }

    #[test]
    fn enabled_style_should_wrap_and_reset() {
        let style = Style::new(true);
        assert_eq!(style.green("ok"), "\x1b[92mok\x1b[0m");
    }
}
