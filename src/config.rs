//! Greeting configuration.

/// Text shown when no other message is configured.
pub const DEFAULT_MESSAGE: &str = "Curses programming in Python";

/// What the greeter puts on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreeterConfig {
    /// Text written at the top-left cell. Embedded newlines start new rows.
    pub message: String,
}

impl GreeterConfig {
    /// Create a config showing `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}
