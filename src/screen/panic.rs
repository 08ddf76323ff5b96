//! Restore the terminal before a panic message is printed.
//!
//! The `ScreenHandle` guard already restores during unwinding, but only
//! after the default hook has written the message into the alternate
//! screen, where it disappears.

use std::panic;
use std::sync::Once;

use super::mode::restore_engaged;

static INSTALL: Once = Once::new();

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Idempotent: repeated calls install the hook once. The hook and the
/// guard share one engaged flag, so the terminal is restored only once.
pub fn install_panic_hook() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if restore_engaged() {
                tracing::debug!("terminal restored from panic hook");
            }
            previous(info);
        }));
    });
}
