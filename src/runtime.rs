// SPDX-License-Identifier: MIT

//! Runs the target program under the legacy personality.
//!
//! The `launch` function is the main entry point.  It takes an `Invocation`
//! naming the target program and its arguments, sets the `UNAME26`
//! personality on the current process, then replaces the process image with
//! the target.  The personality is inherited across the exec, so the target
//! and all of its children see a 2.6.x kernel release.
//!
//! Only Linux has personalities.  Elsewhere the personality operations, and
//! so `launch`, fail with `LaunchError::Unsupported`.
//!
//! On success `launch` never returns.

pub mod error;
pub mod invocation;

mod replace;

use std::convert::Infallible;

pub use invocation::Invocation;
pub use replace::replace_process;

#[cfg(target_os = "linux")]
mod persona_linux;

#[cfg(target_os = "linux")]
pub use nix::sys::personality::Persona;

#[cfg(target_os = "linux")]
pub use persona_linux::{current_personality, legacy_persona, set_legacy_personality};

#[cfg(not(target_os = "linux"))]
mod persona_other;

#[cfg(not(target_os = "linux"))]
pub use persona_other::{current_personality, set_legacy_personality, Persona};

pub fn launch(invocation: &Invocation) -> Result<Infallible, error::LaunchError> {
    log::debug!(
        "launching {:?} with {} argument(s)",
        invocation.target(),
        invocation.args().len()
    );
    // Must happen before the exec; the new image only inherits it.
    set_legacy_personality()?;
    replace_process(invocation)
}
