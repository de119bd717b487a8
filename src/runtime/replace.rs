// SPDX-License-Identifier: MIT

//! Replace the process image with the target program.

use std::convert::Infallible;

use nix::sys::signal::{SigHandler, Signal};

use crate::runtime::{error::LaunchError, invocation::Invocation};

/// Execute the invocation with a `PATH` search, like `execvp(3)`.
///
/// The environment is inherited as-is.  On success this never returns; to
/// come back at all means the exec failed.
pub fn replace_process(invocation: &Invocation) -> Result<Infallible, LaunchError> {
    let file = invocation.target_cstr()?;
    let argv = invocation.argv()?;
    restore_sigpipe();
    log::trace!("execvp {:?} with {} argument(s)", file, argv.len());
    match nix::unistd::execvp(file.as_c_str(), argv.as_slice()) {
        Ok(never) => match never {},
        Err(errno) => Err(LaunchError::exec(invocation.target(), errno)),
    }
}

/// The Rust runtime ignores SIGPIPE, and an ignored disposition survives exec.
/// The target must start with the default one, as it would from a shell.
fn restore_sigpipe() {
    // SAFETY: resetting to SIG_DFL installs no handler code.
    if let Err(e) = unsafe { nix::sys::signal::signal(Signal::SIGPIPE, SigHandler::SigDfl) } {
        log::warn!("could not restore the SIGPIPE disposition: {}", e);
    }
}
