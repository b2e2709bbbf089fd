//! `ProjectFilesystem` implementation for `LocalProjectFilesystem`.

use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

use super::LocalProjectFilesystem;

impl ProjectFilesystem for LocalProjectFilesystem {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::remove_file(full_path).map_err(AppError::from)
    }
}
