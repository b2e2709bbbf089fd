//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{ConsoleReporter, LocalProjectFilesystem, ProcessCommandRunner, TerminalPrompt};
use crate::app::AppContext;
use crate::app::commands::{create_project, install};
use crate::domain::{InstallStep, ProjectName};
use crate::ports::{CommandRunner, CredentialPrompt, ProgressReporter};

pub use crate::app::commands::install::{InstallOptions, InstallOutcome};
pub use crate::app::commands::patch_file::PatchReport;
pub use crate::app::commands::prune_defaults::PruneReport;
pub use crate::domain::AppError;

/// Scaffold a new project under the current directory.
pub fn install(options: InstallOptions) -> Result<InstallOutcome, AppError> {
    install_in(
        &std::env::current_dir()?,
        &options,
        ProcessCommandRunner::new(),
        TerminalPrompt::new(),
        ConsoleReporter::new(),
    )
}

/// Scaffold a new project under `parent` with the given collaborators.
///
/// Nothing touches the disk when the project name is missing. A failure after
/// the project directory exists leaves it in place.
pub fn install_in<C, P, R>(
    parent: &Path,
    options: &InstallOptions,
    runner: C,
    prompt: P,
    reporter: R,
) -> Result<InstallOutcome, AppError>
where
    C: CommandRunner,
    P: CredentialPrompt,
    R: ProgressReporter,
{
    let name = ProjectName::from_arg(options.project_name.as_deref())?;

    let root = install::run_step(&reporter, InstallStep::CreateProject, || {
        create_project::execute(parent, &name)
    })?;

    let ctx = AppContext::new(runner, LocalProjectFilesystem::new(root), prompt, reporter);
    install::execute(&ctx, options)
}
