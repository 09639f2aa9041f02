use crate::error::{MkverError, Result};
use std::process::Command;
use tracing::debug;

/// Capability to run an external program and capture its output
///
/// Implemented by [ProcessRunner] for real use; tests substitute canned output.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and return its trimmed standard output.
    ///
    /// # Returns
    /// * `Ok(String)` - Trimmed stdout of a successful run
    /// * `Err(MkverError::CommandExecution)` - If the program could not be spawned or
    ///   exited with a non-zero status
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Runs commands as child processes of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let cmdline = command_line(program, args);
        debug!("Running {}", cmdline);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| MkverError::command(&cmdline, e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MkverError::command(
                &cmdline,
                format!(
                    "exit code {}: {}",
                    output.status.code().unwrap_or(-1),
                    stderr.trim()
                ),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// `program arg1 arg2` for diagnostics
pub fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
