//! Waiting for the single keypress.
//!
//! The wait is the only suspension point of a run. Termination signals are
//! turned into an error instead of killing the process so the screen guard
//! still gets to restore the terminal.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use signal_hook::SigId;

use crate::error::GreeterError;

/// How often the wait loop checks for a pending signal.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Something that yields one keypress.
pub trait KeySource {
    /// Block until a key is pressed.
    fn wait_for_key(&mut self) -> Result<KeyEvent, GreeterError>;
}

/// Return the key if `event` is a key press.
///
/// Release and repeat reports (sent by terminals with the kitty keyboard
/// protocol and on Windows) and every non-key event are skipped.
pub fn keypress(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}

/// Resolve an accepted key press into the outcome of the wait.
///
/// Raw mode delivers Ctrl-C as a key instead of SIGINT; it still ends the
/// run as an interrupt, the same way a cbreak-mode terminal would.
pub fn key_outcome(key: KeyEvent) -> Result<KeyEvent, GreeterError> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Err(GreeterError::Interrupted {
            signal: signal_hook::consts::SIGINT,
        });
    }
    Ok(key)
}

/// Crossterm key reader that gives up when a termination signal arrives.
pub struct SignalAwareKeys {
    pending: Arc<AtomicUsize>,
    registrations: Vec<SigId>,
}

impl SignalAwareKeys {
    /// Register the termination signals and start watching for them.
    pub fn install() -> Result<Self, GreeterError> {
        let mut keys = Self {
            pending: Arc::new(AtomicUsize::new(0)),
            registrations: Vec::new(),
        };

        for signal in watched_signals() {
            let id = signal_hook::flag::register_usize(
                signal,
                Arc::clone(&keys.pending),
                signal as usize,
            )?;
            keys.registrations.push(id);
        }

        Ok(keys)
    }

    /// The last termination signal received, if any.
    pub fn pending_signal(&self) -> Option<i32> {
        match self.pending.load(Ordering::SeqCst) {
            0 => None,
            signal => i32::try_from(signal).ok(),
        }
    }
}

impl KeySource for SignalAwareKeys {
    fn wait_for_key(&mut self) -> Result<KeyEvent, GreeterError> {
        loop {
            if let Some(signal) = self.pending_signal() {
                tracing::warn!("signal {} received while waiting for a key", signal);
                return Err(GreeterError::Interrupted { signal });
            }

            let ready = match event::poll(POLL_INTERVAL) {
                Ok(ready) => ready,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if !ready {
                continue;
            }

            if let Some(key) = keypress(&event::read()?) {
                tracing::debug!("key received: {:?}", key.code);
                return key_outcome(key);
            }
        }
    }
}

impl Drop for SignalAwareKeys {
    fn drop(&mut self) {
        for id in self.registrations.drain(..) {
            signal_hook::low_level::unregister(id);
        }
    }
}

fn watched_signals() -> Vec<i32> {
    #[allow(unused_mut)]
    let mut signals = signal_hook::consts::TERM_SIGNALS.to_vec();
    #[cfg(unix)]
    signals.push(signal_hook::consts::SIGHUP);
    signals
}
