//! Greeter errors.

/// Errors that can end a greeter run.
#[derive(Debug, thiserror::Error)]
pub enum GreeterError {
    #[error("Terminal unavailable: {reason}")]
    TerminalUnavailable { reason: String },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Interrupted by signal {signal}")]
    Interrupted { signal: i32 },
}

impl GreeterError {
    /// Shorthand for a `TerminalUnavailable` error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::TerminalUnavailable {
            reason: reason.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// Signals follow the shell convention of 128 + signal number.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::TerminalUnavailable { .. } | Self::Io(_) => 1,
            Self::Interrupted { signal } => {
                u8::try_from(128 + (*signal).clamp(0, 127)).unwrap_or(u8::MAX)
            }
        }
    }
}
