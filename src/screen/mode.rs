//! Managed display mode: raw input, alternate screen, hidden cursor.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::error::GreeterError;

/// Set while the process terminal is in the managed mode.
///
/// Whoever clears it first (a `leave` or the panic hook) does the restore.
static ENGAGED: AtomicBool = AtomicBool::new(false);

/// Enter and leave a managed display mode.
///
/// `leave` must only undo what `enter` actually enabled, and must be safe to
/// call after a partial or failed `enter`.
pub trait TerminalMode {
    /// Switch the terminal into the managed mode.
    fn enter(&mut self) -> Result<(), GreeterError>;

    /// Restore the terminal to its state before `enter`.
    fn leave(&mut self) -> io::Result<()>;
}

/// Crossterm-backed display mode on stdout.
///
/// Tracks every step it enabled so a failed `enter` can be unwound.
#[derive(Debug, Default)]
pub struct CrosstermMode {
    raw_mode: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
}

impl CrosstermMode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalMode for CrosstermMode {
    fn enter(&mut self) -> Result<(), GreeterError> {
        terminal::enable_raw_mode()
            .map_err(|e| GreeterError::unavailable(format!("cannot enable raw mode: {}", e)))?;
        self.raw_mode = true;
        ENGAGED.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| {
            GreeterError::unavailable(format!("cannot enter alternate screen: {}", e))
        })?;
        self.alternate_screen = true;

        execute!(stdout, cursor::Hide)?;
        self.cursor_hidden = true;

        tracing::debug!("entered managed display mode");
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        let steps = (self.cursor_hidden, self.alternate_screen, self.raw_mode);
        self.cursor_hidden = false;
        self.alternate_screen = false;
        self.raw_mode = false;

        if !take_engaged() {
            // Never engaged, or the panic hook already restored
            return Ok(());
        }

        let (cursor_hidden, alternate_screen, raw_mode) = steps;
        let mut stdout = io::stdout();
        let mut first_error = None;

        // Reverse order of enter, raw mode last
        if cursor_hidden {
            keep_first(&mut first_error, execute!(stdout, cursor::Show));
        }
        if alternate_screen {
            keep_first(&mut first_error, execute!(stdout, LeaveAlternateScreen));
        }
        if raw_mode {
            keep_first(&mut first_error, terminal::disable_raw_mode());
        }
        keep_first(&mut first_error, stdout.flush());

        tracing::debug!("left managed display mode");
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Claim the pending restore. Returns true for exactly one caller per `enter`.
fn take_engaged() -> bool {
    ENGAGED.swap(false, Ordering::SeqCst)
}

/// Restore the process terminal unconditionally, if it is still engaged.
///
/// Used from the panic hook, where the owning `CrosstermMode` is out of
/// reach. Returns whether anything was restored.
pub(crate) fn restore_engaged() -> bool {
    if !take_engaged() {
        return false;
    }
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();
    true
}

/// Remember the first failure but keep restoring.
fn keep_first(slot: &mut Option<io::Error>, result: io::Result<()>) {
    if let Err(e) = result {
        slot.get_or_insert(e);
    }
}

/// Serializes tests that touch the process-wide engaged flag.
#[cfg(test)]
pub(crate) fn engaged_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};

    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
