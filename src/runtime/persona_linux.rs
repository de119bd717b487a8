// SPDX-License-Identifier: MIT

//! The process personality.  Specific to Linux.
//!
//! `UNAME26` makes the kernel report a 2.6.x release through `uname(2)` for
//! this process and everything it executes.  The personality survives
//! `execve(2)`, which is what lets the launcher hand it to the target.

use nix::sys::personality::{self, Persona};

use crate::runtime::error::LaunchError;

/// `PER_LINUX` is the zero base, so the request is the `UNAME26` bit alone.
/// The bit value comes from the libc headers.
pub fn legacy_persona() -> Persona {
    Persona::empty() | Persona::UNAME26
}

/// Replace the personality of the calling process with the legacy one.
/// Returns the previous personality.
///
/// This overwrites any other personality bits already set, and succeeds
/// when the legacy personality is already in place.
pub fn set_legacy_personality() -> Result<Persona, LaunchError> {
    let wanted = legacy_persona();
    let previous = personality::set(wanted).map_err(LaunchError::Personality)?;
    log::debug!(
        "personality changed from {:#x} to {:#x}",
        previous.bits(),
        wanted.bits()
    );
    Ok(previous)
}

pub fn current_personality() -> Result<Persona, LaunchError> {
    personality::get().map_err(LaunchError::Personality)
}
