//! Greeter - shows a line of text on the terminal and waits for a keypress.
//!
//! The library holds everything the `greeter` binary does so it can be
//! driven against a virtual terminal in tests:
//!
//! - `config`: the configured greeting
//! - `screen`: scoped ownership of the terminal display (`ScreenHandle`)
//! - `input`: the single awaited keypress
//! - `greeter`: the clear → write → flush → wait sequence
//!
//! # Usage
//!
//! ```no_run
//! use greeter::{GreeterConfig, TerminalGreeter};
//!
//! let greeter = TerminalGreeter::new(GreeterConfig::default());
//! if let Err(e) = greeter.run() {
//!     eprintln!("{}", e);
//!     std::process::exit(e.exit_code().into());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod greeter;
pub mod input;
pub mod screen;
pub mod theme;

pub use config::{GreeterConfig, DEFAULT_MESSAGE};
pub use error::GreeterError;
pub use greeter::{render_greeting, TerminalGreeter};
pub use input::{KeySource, SignalAwareKeys};
pub use screen::{CrosstermMode, ScreenHandle, TerminalMode};
