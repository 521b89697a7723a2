//! External linter invocation.

use crate::error::{LintError, Result};
use std::ffi::OsStr;
use std::process::{Command, Stdio};
use tracing::debug;

/// Run `program` with inherited stdio and wait for it.
///
/// Returns the exit code, or `1` when the process ended without one (killed by a
/// signal).
///
/// # Errors
///
/// [`LintError::Spawn`] if the program cannot be started, e.g. it is not on `PATH`.
pub fn run_command<I, S>(program: &str, args: I) -> Result<i32>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    debug!(command = ?command, "spawning linter");

    let status = command.status().map_err(|source| LintError::Spawn {
        command: program.to_string(),
        source,
    })?;
    Ok(status.code().unwrap_or(1))
}
