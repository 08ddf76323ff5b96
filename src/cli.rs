//! Command-line definition.
//!
//! The program takes no arguments. clap still provides `--help` and
//! `--version`, and rejects anything else before the terminal is touched.

use clap::Parser;

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("GREETER_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("GREETER_BUILD_DATE"),
    ")"
);

/// Show a greeting on the terminal and wait for a keypress.
#[derive(Debug, Parser)]
#[command(name = "greeter", version, long_version = LONG_VERSION)]
pub struct Cli {}
