use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ProjectName};

/// Create the project directory under `parent` and return its path.
///
/// Fails if the directory already exists, so an install never lands on top
/// of an existing project.
pub fn execute(parent: &Path, name: &ProjectName) -> Result<PathBuf, AppError> {
    let path = parent.join(name.as_str());
    fs::create_dir(&path).map_err(|source| AppError::ProjectDirectory { path: path.clone(), source })?;
    tracing::debug!(path = %path.display(), "created project directory");
    Ok(path)
}
