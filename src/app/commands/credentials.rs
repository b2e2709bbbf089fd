use crate::app::AppContext;
use crate::domain::{ApiCredentials, AppError, InstallerProfile, PatchFailurePolicy};
use crate::ports::{CommandRunner, CredentialPrompt, ProgressReporter, ProjectFilesystem};

use super::patch_file::{PatchReport, patch_with_policy};

pub const API_URL_QUESTION: &str = "Please enter your API url";
pub const API_ACCESS_KEY_QUESTION: &str = "Please enter your API access key";

/// Resolve both credentials, prompting once for each value not given.
///
/// The URL is always resolved before the key. Empty arguments count as absent.
pub fn collect<P: CredentialPrompt>(
    prompt: &P,
    base_url: Option<&str>,
    access_key: Option<&str>,
) -> Result<ApiCredentials, AppError> {
    let base_url = resolve(prompt, base_url, API_URL_QUESTION)?;
    let access_key = resolve(prompt, access_key, API_ACCESS_KEY_QUESTION)?;
    Ok(ApiCredentials { base_url, access_key })
}

fn resolve<P: CredentialPrompt>(
    prompt: &P,
    supplied: Option<&str>,
    question: &str,
) -> Result<String, AppError> {
    match supplied.filter(|value| !value.is_empty()) {
        Some(value) => Ok(value.to_string()),
        None => prompt.ask(question),
    }
}

/// Write `credentials` into the environment file in a single patch.
pub fn write_env<C, F, P, R>(
    ctx: &AppContext<C, F, P, R>,
    profile: &InstallerProfile,
    credentials: &ApiCredentials,
    policy: PatchFailurePolicy,
) -> Result<PatchReport, AppError>
where
    C: CommandRunner,
    F: ProjectFilesystem,
    P: CredentialPrompt,
    R: ProgressReporter,
{
    patch_with_policy(
        ctx.filesystem(),
        ctx.reporter(),
        &profile.env_file,
        &credentials.env_replacements(),
        policy,
    )
}

/// Collect the credentials, then write them to the environment file.
pub fn execute<C, F, P, R>(
    ctx: &AppContext<C, F, P, R>,
    profile: &InstallerProfile,
    base_url: Option<&str>,
    access_key: Option<&str>,
    policy: PatchFailurePolicy,
) -> Result<PatchReport, AppError>
where
    C: CommandRunner,
    F: ProjectFilesystem,
    P: CredentialPrompt,
    R: ProgressReporter,
{
    let credentials = collect(ctx.prompt(), base_url, access_key)?;
    write_env(ctx, profile, &credentials, policy)
}
