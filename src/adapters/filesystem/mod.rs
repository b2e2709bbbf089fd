//! Filesystem adapter for the `ProjectFilesystem` port.
//!
//! `LocalProjectFilesystem` owns the project root path and validates every
//! path against it before touching the disk.

mod project_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct LocalProjectFilesystem {
    root: PathBuf,
}

impl LocalProjectFilesystem {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Join a project-relative path onto the root. Not yet validated.
    pub(crate) fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl LocalProjectFilesystem {
    /// Reject paths that leave the project directory once `.` and `..` are
    /// resolved.
    ///
    /// `env_file`, `config_file` and `default_files` come from a user-supplied
    /// profile, so a value such as `../.env` or `/etc/hosts` must not let the
    /// installer patch or delete files outside the project it just created.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }

        Ok(())
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => {
                ret.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}
