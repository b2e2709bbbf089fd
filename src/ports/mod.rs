mod command_runner;
mod credential_prompt;
mod progress_reporter;
mod project_filesystem;

pub use command_runner::{CommandRunner, ShellCommand};
pub use credential_prompt::CredentialPrompt;
pub use progress_reporter::ProgressReporter;
pub use project_filesystem::ProjectFilesystem;
