// SPDX-License-Identifier: MIT

//! Personality stand-ins for Unix systems without `personality(2)`.
//!
//! There is no personality value to hand out here, so `Persona` is
//! uninhabited and both operations always report `Unsupported`.

use std::convert::Infallible;

use crate::runtime::error::LaunchError;

/// No personality exists on this platform.
pub type Persona = Infallible;

fn unsupported() -> LaunchError {
    LaunchError::Unsupported(format!(
        "not supported on {}",
        std::env::consts::OS
    ))
}

pub fn set_legacy_personality() -> Result<Persona, LaunchError> {
    log::debug!("no personality support on {}", std::env::consts::OS);
    Err(unsupported())
}

pub fn current_personality() -> Result<Persona, LaunchError> {
    Err(unsupported())
}
