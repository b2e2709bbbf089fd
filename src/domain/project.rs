use std::fmt;

use super::AppError;

/// Name of the project directory to scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Accept any non-empty name; the filesystem has the final say.
    pub fn new(value: impl Into<String>) -> Result<Self, AppError> {
        let value = value.into();
        if value.is_empty() {
            return Err(AppError::MissingProjectName);
        }
        Ok(Self(value))
    }

    /// Resolve an optional CLI argument, treating an empty string as absent.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, AppError> {
        match arg {
            Some(value) => Self::new(value),
            None => Err(AppError::MissingProjectName),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
