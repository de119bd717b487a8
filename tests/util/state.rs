//! Expected outcome of a launcher run.

use std::process::Output;

#[derive(Debug)]
pub struct Expected {
    /// The exit code of the launcher (or of the program it became).
    pub exit_code: i32,

    /// Exact stdout, when the test cares about it.
    pub stdout: Option<Vec<u8>>,

    /// Exact stderr, when the test cares about it.
    pub stderr: Option<Vec<u8>>,
}

impl Expected {
    /// The target ran, exited cleanly, wrote `stdout`, and nothing reached stderr.
    pub fn succeeds_with(stdout: &[u8]) -> Self {
        Self {
            exit_code: 0,
            stdout: Some(stdout.to_vec()),
            stderr: Some(Vec::new()),
        }
    }

    /// The launcher failed before or at the exec, writing exactly `stderr`.
    pub fn fails_with(stderr: impl AsRef<[u8]>) -> Self {
        Self {
            exit_code: 1,
            stdout: Some(Vec::new()),
            stderr: Some(stderr.as_ref().to_vec()),
        }
    }

    /// Ensure the expected matches the actual.
    pub fn assert(&self, out: &Output) {
        let mut success = true;
        if out.status.code() != Some(self.exit_code) {
            println!("Expected exit code {}, got {:?}", self.exit_code, out.status);
            success = false;
        }
        if let Some(stdout) = &self.stdout {
            if &out.stdout != stdout {
                println!("Expected stdout: {:?}", String::from_utf8_lossy(stdout));
                println!("  Actual stdout: {:?}", String::from_utf8_lossy(&out.stdout));
                success = false;
            }
        }
        if let Some(stderr) = &self.stderr {
            if &out.stderr != stderr {
                println!("Expected stderr: {:?}", String::from_utf8_lossy(stderr));
                println!("  Actual stderr: {:?}", String::from_utf8_lossy(&out.stderr));
                success = false;
            }
        }
        assert!(success, "launcher outcome mismatch");
    }
}
