//! Controlling-terminal probe.

use crate::error::GreeterError;

/// Fail with `TerminalUnavailable` unless stdin and stdout are both ttys.
///
/// Runs before anything is written, so a missing terminal produces no
/// display output at all.
pub fn ensure_tty() -> Result<(), GreeterError> {
    check_streams(
        atty::is(atty::Stream::Stdin),
        atty::is(atty::Stream::Stdout),
    )
}

fn check_streams(stdin_tty: bool, stdout_tty: bool) -> Result<(), GreeterError> {
    match (stdin_tty, stdout_tty) {
        (true, true) => Ok(()),
        (false, _) => Err(GreeterError::unavailable("stdin is not a terminal")),
        (true, false) => Err(GreeterError::unavailable("stdout is not a terminal")),
    }
}
