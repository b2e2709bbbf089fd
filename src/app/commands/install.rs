//! The install pipeline: each step runs only after the previous one succeeded.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, InstallStep, InstallerProfile, PatchFailurePolicy};
use crate::ports::{CommandRunner, CredentialPrompt, ProgressReporter, ProjectFilesystem};

use super::patch_file::PatchReport;
use super::prune_defaults::PruneReport;
use super::{configure_framework, credentials, install_plugin, prune_defaults, scaffold_framework};

/// Inputs for one install run.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub project_name: Option<String>,
    pub api_base_url: Option<String>,
    pub api_access_key: Option<String>,
    pub profile: InstallerProfile,
    /// Abort on patch failures regardless of the profile policy.
    pub strict: bool,
}

impl InstallOptions {
    pub fn patch_policy(&self) -> PatchFailurePolicy {
        if self.strict { PatchFailurePolicy::Abort } else { self.profile.patch_failure }
    }
}

/// Summary of a completed install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub project_root: PathBuf,
    pub config: PatchReport,
    pub pruned: PruneReport,
    pub env: PatchReport,
}

/// Report `step` around `action`, marking it failed if it returns an error.
pub(crate) fn run_step<R, T>(
    reporter: &R,
    step: InstallStep,
    action: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError>
where
    R: ProgressReporter,
{
    reporter.step_started(step);
    match action() {
        Ok(value) => {
            reporter.step_finished(step);
            Ok(value)
        }
        Err(err) => {
            reporter.step_failed(step);
            Err(err)
        }
    }
}

/// Run every step after project creation inside the context's project root.
pub fn execute<C, F, P, R>(
    ctx: &AppContext<C, F, P, R>,
    options: &InstallOptions,
) -> Result<InstallOutcome, AppError>
where
    C: CommandRunner,
    F: ProjectFilesystem,
    P: CredentialPrompt,
    R: ProgressReporter,
{
    let profile = &options.profile;
    let policy = options.patch_policy();
    let reporter = ctx.reporter();

    run_step(reporter, InstallStep::ScaffoldFramework, || scaffold_framework::execute(ctx, profile))?;
    run_step(reporter, InstallStep::InstallPlugin, || install_plugin::execute(ctx, profile))?;
    let config = run_step(reporter, InstallStep::ConfigureFramework, || {
        configure_framework::execute(ctx, profile, policy)
    })?;
    let pruned =
        run_step(reporter, InstallStep::PruneDefaults, || Ok(prune_defaults::execute(ctx, profile)))?;
    let env = run_step(reporter, InstallStep::WriteCredentials, || {
        credentials::execute(
            ctx,
            profile,
            options.api_base_url.as_deref(),
            options.api_access_key.as_deref(),
            policy,
        )
    })?;

    Ok(InstallOutcome { project_root: ctx.filesystem().root(), config, pruned, env })
}
