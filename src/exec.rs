//! External process execution
//!
//! Command assembly (see `invocation`) is kept separate from execution so
//! the pipeline can be tested without spawning real processes. The pipeline
//! talks to a `CommandRunner`; `ProcessRunner` is the real implementation.

use std::process::{Command, Stdio};

use crate::error::{MapshipError, MapshipResult};
use crate::invocation::InvocationSpec;

/// Executes one external command, blocking until it exits.
pub trait CommandRunner {
    fn run(&self, spec: &InvocationSpec) -> MapshipResult<()>;
}

/// Runs commands as real child processes.
///
/// Child stderr is always inherited so tool diagnostics reach the console.
/// In JSON mode child stdout is discarded to keep the NDJSON event stream
/// parseable.
pub struct ProcessRunner {
    json: bool,
}

impl ProcessRunner {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, spec: &InvocationSpec) -> MapshipResult<()> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args).stdin(Stdio::inherit());

        if self.json {
            cmd.stdout(Stdio::null()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd.status().map_err(|source| MapshipError::Spawn {
            program: spec.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(MapshipError::CommandFailed {
                program: spec.program.clone(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

/// Check whether a program is installed and responds to `--version`.
pub fn check_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
