use crate::app::AppContext;
use crate::domain::{AppError, InstallerProfile};
use crate::ports::{CommandRunner, CredentialPrompt, ProgressReporter, ProjectFilesystem, ShellCommand};

/// Build the package-manager invocation that adds the plugin as a dev dependency.
pub fn install_command(profile: &InstallerProfile) -> ShellCommand {
    ShellCommand::new(
        profile.package_manager.as_str(),
        ["i", profile.plugin_package.as_str(), "--save-dev"],
    )
}

/// Install the plugin package. Its own postinstall script lays out the project files.
pub fn execute<C, F, P, R>(
    ctx: &AppContext<C, F, P, R>,
    profile: &InstallerProfile,
) -> Result<(), AppError>
where
    C: CommandRunner,
    F: ProjectFilesystem,
    P: CredentialPrompt,
    R: ProgressReporter,
{
    let command = install_command(profile);
    tracing::info!(command = %command, "installing plugin package");
    ctx.runner().run(&command, &ctx.filesystem().root())
}
