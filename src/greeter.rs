//! The greeting sequence.
//!
//! A run is a fixed sequence on an owned screen: clear, write the message
//! at the top-left cell, flush, wait for one key, restore. Any failure
//! ends the run; the screen guard restores the terminal either way.

use std::io;

use ratatui::{
    backend::{Backend, CrosstermBackend},
    widgets::{Paragraph, Wrap},
    Frame, Terminal,
};

use crate::config::GreeterConfig;
use crate::error::GreeterError;
use crate::input::{KeySource, SignalAwareKeys};
use crate::screen::{ensure_tty, install_panic_hook, CrosstermMode, ScreenHandle, TerminalMode};

/// Shows the configured message and waits for a keypress.
#[derive(Debug, Clone, Default)]
pub struct TerminalGreeter {
    config: GreeterConfig,
}

impl TerminalGreeter {
    pub fn new(config: GreeterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GreeterConfig {
        &self.config
    }

    /// Run on the process terminal (stdin/stdout).
    ///
    /// # Errors
    ///
    /// `TerminalUnavailable` when stdin or stdout is not a terminal, or the
    /// terminal cannot be switched into raw mode. Nothing is written to
    /// stdout in that case.
    #[cfg(not(tarpaulin_include))]
    pub fn run(&self) -> Result<(), GreeterError> {
        ensure_tty()?;
        install_panic_hook();

        let mut keys = SignalAwareKeys::install()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(|e| GreeterError::unavailable(format!("cannot read terminal size: {}", e)))?;

        self.run_with(CrosstermMode::new(), &mut terminal, &mut keys)
    }

    /// Run the sequence over the given display mode, terminal and key source.
    ///
    /// The display mode is restored before this returns, on success and on
    /// every error.
    pub fn run_with<M, B, K>(
        &self,
        mode: M,
        terminal: &mut Terminal<B>,
        keys: &mut K,
    ) -> Result<(), GreeterError>
    where
        M: TerminalMode,
        B: Backend,
        K: KeySource,
    {
        let screen = ScreenHandle::acquire(mode)?;

        terminal.clear()?;
        // draw() flushes the frame to the backend
        terminal.draw(|frame| render_greeting(frame, &self.config))?;

        // The key itself is not used
        keys.wait_for_key()?;

        screen.release()
    }
}

/// Draw the greeting starting at the top-left cell of the frame.
///
/// Long text wraps onto the following rows.
pub fn render_greeting(frame: &mut Frame, config: &GreeterConfig) {
    let greeting = Paragraph::new(config.message.as_str()).wrap(Wrap { trim: false });
    frame.render_widget(greeting, frame.area());
}
