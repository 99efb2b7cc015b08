use crate::error::{Result, VersionBumpError};
use crate::exec::{CommandOutput, CommandRunner};
use std::process::Command;

/// Runs external commands as real child processes.
///
/// Output is captured; non-zero exit codes are reported as errors carrying
/// the captured stdout/stderr. There is no timeout: a hung child hangs the
/// run.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            VersionBumpError::command(format!("Failed to execute {}: {}", program, e))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(VersionBumpError::command(format!(
                "{} exited with code {}\nStdout: {}\nStderr: {}",
                program,
                output.status.code().unwrap_or(-1),
                stdout,
                stderr
            )));
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
