use crate::app::AppContext;
use crate::domain::InstallerProfile;
use crate::ports::{CommandRunner, CredentialPrompt, ProgressReporter, ProjectFilesystem};

/// Files handled by the prune step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub removed: Vec<String>,
    pub skipped: Vec<String>,
}

/// Remove the generator's default template files.
///
/// Any failure counts as "already removed": a missing file and a permission
/// error are reported the same way and never stop the install.
pub fn execute<C, F, P, R>(ctx: &AppContext<C, F, P, R>, profile: &InstallerProfile) -> PruneReport
where
    C: CommandRunner,
    F: ProjectFilesystem,
    P: CredentialPrompt,
    R: ProgressReporter,
{
    let mut report = PruneReport::default();

    for file in &profile.default_files {
        match ctx.filesystem().remove_file(file) {
            Ok(()) => {
                ctx.reporter().file_removed(file);
                report.removed.push(file.clone());
            }
            Err(err) => {
                tracing::debug!(file = %file, error = %err, "skipping template file");
                ctx.reporter().file_skipped(file);
                report.skipped.push(file.clone());
            }
        }
    }

    report
}
