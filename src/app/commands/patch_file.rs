//! Idempotent file patching with a configurable failure policy.

use crate::domain::{AppError, PatchFailurePolicy, PatchOutcome, Replacement, apply_all};
use crate::ports::{ProgressReporter, ProjectFilesystem};

/// What happened to one patched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchReport {
    /// The file was rewritten; one outcome per replacement.
    Patched(Vec<PatchOutcome>),
    /// The patch failed and the failure was tolerated.
    Skipped { reason: String },
}

/// Read `path`, apply `replacements` in order, and write the file back whole.
pub fn patch_file<F: ProjectFilesystem>(
    fs: &F,
    path: &str,
    replacements: &[Replacement],
) -> Result<Vec<PatchOutcome>, AppError> {
    let content = fs.read_file(path).map_err(|e| AppError::PatchFailed {
        path: path.to_string(),
        details: e.to_string(),
    })?;

    let (patched, outcomes) = apply_all(&content, replacements);

    fs.write_file(path, &patched).map_err(|e| AppError::PatchFailed {
        path: path.to_string(),
        details: e.to_string(),
    })?;

    tracing::debug!(path, outcomes = ?outcomes, "patched file");
    Ok(outcomes)
}

/// Patch `path` and apply `policy` to failures.
///
/// `Warn` reports the failure and returns `PatchReport::Skipped`. `Abort`
/// returns the error, and also treats a missing needle as a failure, in which
/// case the file is left untouched.
pub fn patch_with_policy<F, R>(
    fs: &F,
    reporter: &R,
    path: &str,
    replacements: &[Replacement],
    policy: PatchFailurePolicy,
) -> Result<PatchReport, AppError>
where
    F: ProjectFilesystem,
    R: ProgressReporter,
{
    if policy == PatchFailurePolicy::Abort {
        ensure_needles_present(fs, path, replacements)?;
    }

    match patch_file(fs, path, replacements) {
        Ok(outcomes) => {
            for (replacement, outcome) in replacements.iter().zip(&outcomes) {
                if *outcome == PatchOutcome::NeedleMissing {
                    reporter.warning(&format!(
                        "Could not find '{}' in {}. Left unchanged",
                        replacement.needle, path
                    ));
                }
            }
            Ok(PatchReport::Patched(outcomes))
        }
        Err(err) => match policy {
            PatchFailurePolicy::Abort => Err(err),
            PatchFailurePolicy::Warn => {
                reporter.warning(&err.to_string());
                Ok(PatchReport::Skipped { reason: err.to_string() })
            }
        },
    }
}

fn ensure_needles_present<F: ProjectFilesystem>(
    fs: &F,
    path: &str,
    replacements: &[Replacement],
) -> Result<(), AppError> {
    let content = fs.read_file(path).map_err(|e| AppError::PatchFailed {
        path: path.to_string(),
        details: e.to_string(),
    })?;
    let (_, outcomes) = apply_all(&content, replacements);
    for (replacement, outcome) in replacements.iter().zip(outcomes) {
        if outcome == PatchOutcome::NeedleMissing {
            return Err(AppError::MissingNeedle {
                path: path.to_string(),
                needle: replacement.needle.clone(),
            });
        }
    }
    Ok(())
}
