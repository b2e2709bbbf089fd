//! Installer profile loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, InstallerProfile};

/// Load the installer profile from `path`, or the built-in defaults when no path is given.
pub fn load_profile(path: Option<&Path>) -> Result<InstallerProfile, AppError> {
    let Some(path) = path else {
        return Ok(InstallerProfile::default());
    };

    if !path.is_file() {
        return Err(AppError::config_error(format!(
            "Installer config not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let profile = InstallerProfile::parse_toml(&content)?;
    tracing::debug!(path = %path.display(), profile = ?profile, "loaded installer profile");
    Ok(profile)
}
