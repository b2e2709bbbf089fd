pub mod console_reporter;
pub mod filesystem;
pub mod process_command;
pub mod terminal_prompt;

pub use console_reporter::ConsoleReporter;
pub use filesystem::LocalProjectFilesystem;
pub use process_command::ProcessCommandRunner;
pub use terminal_prompt::TerminalPrompt;
