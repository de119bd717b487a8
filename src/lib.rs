//! # uname26
//!
//! The library that runs a program with the Linux uname 2.6 personality.

pub mod runtime;

pub use runtime::{error::LaunchError, launch, Invocation};
