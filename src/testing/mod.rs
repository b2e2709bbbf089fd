pub mod fixtures;

pub use ports::{
    FakeCommandRunner, MockProjectFs, ProgressEvent, RecordingReporter, ScriptedPrompt, TestFiles,
};

use crate::app::AppContext;

pub type TestAppContext =
    AppContext<FakeCommandRunner, MockProjectFs, ScriptedPrompt, RecordingReporter>;

/// Context over in-memory `files` whose prompt replies with `answers` in order.
pub fn test_context(files: &TestFiles, answers: &[&str]) -> TestAppContext {
    AppContext::new(
        FakeCommandRunner::new(),
        MockProjectFs::new(files.clone()),
        ScriptedPrompt::new(answers.iter().copied()),
        RecordingReporter::new(),
    )
}
