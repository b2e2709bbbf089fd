use std::fmt;
use std::path::Path;

use crate::domain::AppError;

/// An external program invocation: program name plus argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }
}

/// Renders the equivalent shell command line, single-quoting arguments that need it.
impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if needs_quoting(arg) {
                write!(f, " '{}'", arg.replace('\'', r"'\''"))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

fn needs_quoting(arg: &str) -> bool {
    arg.is_empty()
        || arg.chars().any(|c| {
            c.is_whitespace()
                || matches!(
                    c,
                    '"' | '\'' | '{' | '}' | '[' | ']' | '$' | '&' | '|' | ';' | '<' | '>' | '*' | '?'
                        | '(' | ')' | '`' | '\\' | '!' | '#'
                )
        })
}

/// Port for running external commands to completion.
pub trait CommandRunner {
    /// Run `command` inside `cwd` and wait for it to exit.
    ///
    /// Returns `AppError::CommandFailed` carrying stderr on a non-zero exit or spawn failure.
    fn run(&self, command: &ShellCommand, cwd: &Path) -> Result<(), AppError>;
}
