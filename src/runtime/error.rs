// SPDX-License-Identifier: MIT

//! Common error type.
//!
//! `write_to` produces the exact diagnostic the launcher writes to standard
//! error before exiting.  `Display` renders the same text, lossily for
//! targets that aren't UTF-8.

use std::{
    ffi::{NulError, OsString},
    fmt::Display,
    io::Write,
    os::unix::ffi::OsStrExt as _,
};

use nix::errno::Errno;

/// The usage text, printed when no target program is given.
pub const USAGE: &str = "Usage: uname26 program ...\nRun program with the uname 2.6 personality";

#[derive(Debug)]
pub enum LaunchError {
    /// No target program was named on the command line.
    Usage,
    /// The kernel rejected the personality request.
    Personality(Errno),
    /// Replacing the process image failed.
    Exec { target: OsString, errno: Errno },
    /// An argument can't be handed to the OS (interior NUL byte).
    InvalidArgument(NulError),
    /// The platform has no personality support.
    Unsupported(String),
}

impl LaunchError {
    /// Write the diagnostic line, newline included.  The target of an exec
    /// failure goes out as raw bytes, exactly as it was given.
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        match self {
            Self::Exec { target, errno } => {
                w.write_all(b"Cannot execute ")?;
                w.write_all(target.as_bytes())?;
                writeln!(w, ": {}", errno.desc())
            }
            other => writeln!(w, "{}", other),
        }
    }

    pub(crate) fn exec(target: &OsString, errno: Errno) -> Self {
        LaunchError::Exec {
            target: target.clone(),
            errno,
        }
    }
}

impl Display for LaunchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage => f.write_str(USAGE),
            // perror(3) style.
            Self::Personality(errno) => write!(f, "personality: {}", errno.desc()),
            Self::Exec { target, errno } => write!(
                f,
                "Cannot execute {}: {}",
                target.to_string_lossy(),
                errno.desc()
            ),
            Self::InvalidArgument(e) => write!(f, "invalid argument: {}", e),
            Self::Unsupported(reason) => write!(f, "personality: {}", reason),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Personality(errno) => Some(errno),
            Self::Exec { errno, .. } => Some(errno),
            Self::InvalidArgument(e) => Some(e),
            Self::Usage | Self::Unsupported(_) => None,
        }
    }
}

impl From<NulError> for LaunchError {
    fn from(e: NulError) -> Self {
        LaunchError::InvalidArgument(e)
    }
}

impl Into<std::io::Error> for LaunchError {
    fn into(self) -> std::io::Error {
        match self {
            Self::Usage => std::io::Error::new(std::io::ErrorKind::InvalidInput, USAGE),
            Self::Personality(errno) => errno.into(),
            Self::Exec { errno, .. } => errno.into(),
            Self::InvalidArgument(e) => {
                std::io::Error::new(std::io::ErrorKind::InvalidFilename, e)
            }
            Self::Unsupported(e) => std::io::Error::new(std::io::ErrorKind::Unsupported, e),
        }
    }
}
