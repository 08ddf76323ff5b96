//! Scoped ownership of the terminal display.

use std::io;

use super::mode::TerminalMode;
use crate::error::GreeterError;

/// Exclusive hold on the terminal display.
///
/// The terminal is restored when the handle is released or dropped,
/// whether through normal control flow, an early `?` return or panic
/// unwinding. Restoration runs at most once.
#[derive(Debug)]
pub struct ScreenHandle<M: TerminalMode> {
    mode: M,
    released: bool,
}

impl<M: TerminalMode> ScreenHandle<M> {
    /// Enter `mode` and take ownership of the display.
    ///
    /// # Errors
    ///
    /// Returns the error from `enter` after undoing any part of the mode
    /// that was already enabled.
    pub fn acquire(mut mode: M) -> Result<Self, GreeterError> {
        if let Err(e) = mode.enter() {
            if let Err(restore_err) = mode.leave() {
                tracing::warn!("restore after failed acquire: {}", restore_err);
            }
            return Err(e);
        }

        tracing::debug!("screen acquired");
        Ok(Self {
            mode,
            released: false,
        })
    }

    /// The display mode this handle owns.
    pub fn mode(&self) -> &M {
        &self.mode
    }

    /// Restore the terminal now and report any failure.
    pub fn release(mut self) -> Result<(), GreeterError> {
        self.restore()?;
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        tracing::debug!("screen released");
        self.mode.leave()
    }
}

impl<M: TerminalMode> Drop for ScreenHandle<M> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("terminal restore failed: {}", e);
        }
    }
}
