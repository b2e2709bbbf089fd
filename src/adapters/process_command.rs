use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::{CommandRunner, ShellCommand};

/// Runs commands as child processes, capturing their output.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, command: &ShellCommand, cwd: &Path) -> Result<(), AppError> {
        tracing::debug!(command = %command, cwd = %cwd.display(), "spawning");

        let output = Command::new(program_name(&command.program))
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AppError::CommandFailed {
                command: command.to_string(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::debug!(command = %command, status = %output.status, "command failed");
            return Err(AppError::CommandFailed {
                command: command.to_string(),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(())
    }
}

/// npm ships its launchers as `.cmd` shims on Windows.
fn program_name(program: &str) -> String {
    if cfg!(windows) && matches!(program, "npm" | "npx") {
        format!("{}.cmd", program)
    } else {
        program.to_string()
    }
}
