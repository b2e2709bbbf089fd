use crate::domain::InstallStep;

/// Port receiving install progress for display.
pub trait ProgressReporter {
    fn step_started(&self, step: InstallStep);

    fn step_finished(&self, step: InstallStep);

    /// A step failed; the install is about to stop.
    fn step_failed(&self, step: InstallStep);

    fn file_removed(&self, path: &str);

    /// A template file could not be removed and was skipped.
    fn file_skipped(&self, path: &str);

    /// A non-fatal problem the user should see.
    fn warning(&self, message: &str);
}
