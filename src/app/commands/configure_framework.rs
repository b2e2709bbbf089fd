use crate::app::AppContext;
use crate::domain::{AppError, InstallerProfile, PatchFailurePolicy};
use crate::ports::{CommandRunner, CredentialPrompt, ProgressReporter, ProjectFilesystem};

use super::patch_file::{PatchReport, patch_with_policy};

/// Register the plugin as the first module in the framework configuration.
pub fn execute<C, F, P, R>(
    ctx: &AppContext<C, F, P, R>,
    profile: &InstallerProfile,
    policy: PatchFailurePolicy,
) -> Result<PatchReport, AppError>
where
    C: CommandRunner,
    F: ProjectFilesystem,
    P: CredentialPrompt,
    R: ProgressReporter,
{
    let registration = profile.module_registration();
    patch_with_policy(
        ctx.filesystem(),
        ctx.reporter(),
        &profile.config_file,
        std::slice::from_ref(&registration),
        policy,
    )
}
