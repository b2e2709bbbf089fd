use crate::app::AppContext;
use crate::domain::{AppError, GeneratorAnswers, InstallerProfile};
use crate::ports::{CommandRunner, CredentialPrompt, ProgressReporter, ProjectFilesystem, ShellCommand};

/// Build the `create-nuxt-app` invocation with the fixed answer set.
pub fn generator_command(profile: &InstallerProfile) -> Result<ShellCommand, AppError> {
    let answers = GeneratorAnswers::default()
        .to_json()
        .map_err(|e| AppError::config_error(format!("Failed to encode generator answers: {}", e)))?;
    Ok(ShellCommand::new(
        profile.generator_command.as_str(),
        ["create-nuxt-app".to_string(), "--answers".to_string(), answers],
    ))
}

/// Run the project generator inside the project root.
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
    let command = generator_command(profile)?;
    tracing::info!(command = %command, "running project generator");
    ctx.runner().run(&command, &ctx.filesystem().root())
}
