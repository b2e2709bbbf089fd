use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for installer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No project name was given on the command line.
    #[error("Please provide an app name like: npx @hubblecommerce/hubble <project-name>")]
    MissingProjectName,

    /// The project directory could not be created.
    #[error("Failed to create project directory {}: {source}", .path.display())]
    ProjectDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An external command exited unsuccessfully or could not be spawned.
    #[error("An error occurred: {details}")]
    CommandFailed { command: String, details: String },

    /// A file could not be read or written while patching it.
    #[error("Failed to patch {path}: {details}")]
    PatchFailed { path: String, details: String },

    /// The text a patch anchors on is absent from the target file.
    #[error("Expected '{needle}' in {path} but it was not found")]
    MissingNeedle { path: String, needle: String },

    /// Reading interactive input failed.
    #[error("Failed to read input: {0}")]
    Prompt(String),

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
