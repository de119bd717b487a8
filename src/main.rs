// SPDX-License-Identifier: MIT

//! `uname26 program ...`
//!
//! Runs `program` with the uname 2.6 personality.  Prints nothing on success;
//! on any failure, prints a single diagnostic to stderr and exits with 1.

use std::process::ExitCode;

use uname26::{launch, Invocation, LaunchError};

fn main() -> ExitCode {
    // Off unless UNAME26_LOG asks for it, so stderr stays clean for the target.
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("UNAME26_LOG", "off")).init();

    let err = match run() {
        Ok(never) => match never {},
        Err(e) => e,
    };
    // Nowhere left to report a failed write to stderr.
    let _ = err.write_to(&mut std::io::stderr().lock());
    ExitCode::FAILURE
}

fn run() -> Result<std::convert::Infallible, LaunchError> {
    let invocation = Invocation::from_env()?;
    launch(&invocation)
}
