//! Project-level filesystem operations.
//!
//! This port provides file I/O scoped to the scaffolded project root.
//! It knows nothing about which files the installer patches or removes;
//! those names come from the installer profile.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for low-level project filesystem operations.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait ProjectFilesystem {
    /// The project root every relative path is resolved against.
    fn root(&self) -> PathBuf;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, replacing it whole.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Remove a file. Fails if the file does not exist.
    fn remove_file(&self, path: &str) -> Result<(), AppError>;
}
