use super::patch::Replacement;

/// Placeholder line for the API base URL in the generated `.env`.
pub const API_BASE_URL_PLACEHOLDER: &str = "API_BASE_URL            = ''";

/// Placeholder line for the API access key in the generated `.env`.
pub const API_ACCESS_KEY_PLACEHOLDER: &str = "API_SW_ACCESS_KEY       = ''";

/// API credentials written into the environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub base_url: String,
    pub access_key: String,
}

impl ApiCredentials {
    pub fn new(base_url: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), access_key: access_key.into() }
    }

    /// Replacements that fill the `.env` placeholders, URL first.
    pub fn env_replacements(&self) -> [Replacement; 2] {
        [
            Replacement::new(
                API_BASE_URL_PLACEHOLDER,
                format!("API_BASE_URL            = '{}'", self.base_url),
            ),
            Replacement::new(
                API_ACCESS_KEY_PLACEHOLDER,
                format!("API_SW_ACCESS_KEY       = '{}'", self.access_key),
            ),
        ]
    }
}
