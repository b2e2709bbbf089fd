use crate::ports::{CommandRunner, CredentialPrompt, ProgressReporter, ProjectFilesystem};

/// Application context holding dependencies for command execution.
///
/// The filesystem is rooted at the project directory, so every command
/// running against this context works inside the new project.
pub struct AppContext<C, F, P, R>
where
    C: CommandRunner,
    F: ProjectFilesystem,
    P: CredentialPrompt,
    R: ProgressReporter,
{
    runner: C,
    filesystem: F,
    prompt: P,
    reporter: R,
}

impl<C, F, P, R> AppContext<C, F, P, R>
where
    C: CommandRunner,
    F: ProjectFilesystem,
    P: CredentialPrompt,
    R: ProgressReporter,
{
    /// Create a new application context.
    pub fn new(runner: C, filesystem: F, prompt: P, reporter: R) -> Self {
        Self { runner, filesystem, prompt, reporter }
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &C {
        &self.runner
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the credential prompt.
    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Get a reference to the progress reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
