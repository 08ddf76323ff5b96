//! Greeter binary: parse the (empty) command line and run the greeting.

use std::process::ExitCode;

use clap::Parser;

use greeter::cli::Cli;
use greeter::theme::stderr_theme;
use greeter::{GreeterConfig, GreeterError, TerminalGreeter};

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let greeter = TerminalGreeter::new(GreeterConfig::default());
    match greeter.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Print the error to stderr; stdout stays untouched.
fn report(e: &GreeterError) {
    let theme = stderr_theme();
    eprintln!("{}", theme.error_text(&format!("greeter: {}", e)));
    if matches!(e, GreeterError::TerminalUnavailable { .. }) {
        eprintln!(
            "{}",
            theme.secondary_text("greeter needs an interactive terminal on stdin and stdout")
        );
    }
}
