//! Colors for CLI diagnostics.
//!
//! The greeting itself is drawn in the terminal's default style. The theme
//! only colors what the binary prints to stderr.

use ratatui::style::Color;

/// Theme configuration for CLI output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Error/warning color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_secondary: Color::DarkGray,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Theme without colors, for `NO_COLOR` and non-terminal stderr.
    pub fn plain() -> Self {
        Self {
            text_secondary: Color::Reset,
            error: Color::Reset,
        }
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }
}

fn paint(color: Color, text: &str) -> String {
    match color_to_ansi(color) {
        "" => text.to_string(),
        code => format!("{}{}{}", code, text, ANSI_RESET),
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[31m",
        Color::DarkGray => "\x1b[90m",
        // Reset, RGB and indexed colors print uncolored
        _ => "",
    }
}

/// Theme for stderr diagnostics.
///
/// Colors are dropped when `NO_COLOR` is set or stderr is not a terminal.
pub fn stderr_theme() -> Theme {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color || !atty::is(atty::Stream::Stderr) {
        Theme::plain()
    } else {
        Theme::default()
    }
}
