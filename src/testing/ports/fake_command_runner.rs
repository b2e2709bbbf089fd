use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandRunner, ShellCommand};

/// Records every command and optionally fails those for chosen programs.
///
/// Programs can also be told to write files into their working directory,
/// standing in for generators when the project lives on a real disk.
#[derive(Default)]
pub struct FakeCommandRunner {
    pub commands: Mutex<Vec<(ShellCommand, PathBuf)>>,
    failures: Mutex<HashMap<String, String>>,
    outputs: Mutex<Vec<(String, String, String)>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make commands whose program is `program` fail with `stderr`.
    pub fn fail_program(&self, program: &str, stderr: &str) {
        self.failures.lock().unwrap().insert(program.to_string(), stderr.to_string());
    }

    /// When `program` runs, write `content` to `path` relative to its working directory.
    pub fn write_on_run(&self, program: &str, path: &str, content: &str) {
        self.outputs.lock().unwrap().push((
            program.to_string(),
            path.to_string(),
            content.to_string(),
        ));
    }

    /// Rendered command lines, in execution order.
    pub fn command_lines(&self) -> Vec<String> {
        self.commands.lock().unwrap().iter().map(|(cmd, _)| cmd.to_string()).collect()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, command: &ShellCommand, cwd: &Path) -> Result<(), AppError> {
        self.commands.lock().unwrap().push((command.clone(), cwd.to_path_buf()));
        if let Some(stderr) = self.failures.lock().unwrap().get(&command.program) {
            return Err(AppError::CommandFailed {
                command: command.to_string(),
                details: stderr.clone(),
            });
        }
        for (program, path, content) in self.outputs.lock().unwrap().iter() {
            if *program == command.program {
                let target = cwd.join(path);
                if let Some(parent) = target.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(target, content)?;
            }
        }
        Ok(())
    }
}
