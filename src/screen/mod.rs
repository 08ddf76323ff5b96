//! Terminal display ownership.
//!
//! A [`ScreenHandle`] owns the terminal for as long as it lives. Entering
//! and leaving the managed display mode goes through the [`TerminalMode`]
//! trait so the guard can be exercised without a real terminal.

mod handle;
mod mode;
mod panic;
mod tty;

pub use handle::ScreenHandle;
pub use mode::{CrosstermMode, TerminalMode};
pub use panic::install_panic_hook;
pub use tty::ensure_tty;
