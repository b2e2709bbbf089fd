use std::sync::Mutex;

use crate::domain::InstallStep;
use crate::ports::ProgressReporter;

/// Progress event captured by `RecordingReporter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Started(InstallStep),
    Finished(InstallStep),
    Failed(InstallStep),
    Removed(String),
    Skipped(String),
    Warning(String),
}

/// Collects progress events instead of drawing them.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step_started(&self, step: InstallStep) {
        self.events.lock().unwrap().push(ProgressEvent::Started(step));
    }

    fn step_finished(&self, step: InstallStep) {
        self.events.lock().unwrap().push(ProgressEvent::Finished(step));
    }

    fn step_failed(&self, step: InstallStep) {
        self.events.lock().unwrap().push(ProgressEvent::Failed(step));
    }

    fn file_removed(&self, path: &str) {
        self.events.lock().unwrap().push(ProgressEvent::Removed(path.to_string()));
    }

    fn file_skipped(&self, path: &str) {
        self.events.lock().unwrap().push(ProgressEvent::Skipped(path.to_string()));
    }

    fn warning(&self, message: &str) {
        self.events.lock().unwrap().push(ProgressEvent::Warning(message.to_string()));
    }
}
