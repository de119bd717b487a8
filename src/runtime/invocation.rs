// SPDX-License-Identifier: MIT

//! The program to launch and the arguments handed to it.

use std::{
    ffi::{CString, OsString},
    os::unix::ffi::OsStrExt as _,
};

use crate::runtime::error::LaunchError;

/// Describes the program that replaces the launcher.
///
/// The target is kept exactly as given on the command line; it becomes the
/// new program's argument zero and is looked up on `PATH` unless it contains
/// a `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    target: OsString,
    args: Vec<OsString>,
}

impl Invocation {
    /// Create an invocation from an explicit target and its arguments.
    pub fn new(target: impl Into<OsString>, args: Vec<OsString>) -> Self {
        Invocation {
            target: target.into(),
            args,
        }
    }

    /// Build the invocation from the arguments following the launcher's own name.
    pub fn from_args<I, S>(args: I) -> Result<Self, LaunchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let target = args.next().ok_or(LaunchError::Usage)?;
        Ok(Invocation {
            target,
            args: args.collect(),
        })
    }

    /// Build the invocation from this process's command line.
    pub fn from_env() -> Result<Self, LaunchError> {
        Self::from_args(std::env::args_os().skip(1))
    }

    pub fn target(&self) -> &OsString {
        &self.target
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// The target as a C string, for the path search.
    pub(crate) fn target_cstr(&self) -> Result<CString, LaunchError> {
        Ok(CString::new(self.target.as_bytes())?)
    }

    /// The full argument vector passed to the new program, target first.
    pub fn argv(&self) -> Result<Vec<CString>, LaunchError> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.target_cstr()?);
        for arg in &self.args {
            argv.push(CString::new(arg.as_bytes())?);
        }
        Ok(argv)
    }
}
