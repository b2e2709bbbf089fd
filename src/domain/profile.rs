//! Installer profile: the knobs that distinguish installer variants.

use serde::Deserialize;

use super::AppError;
use super::patch::Replacement;

/// What to do when a configuration or environment patch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchFailurePolicy {
    /// Log the failure and keep installing.
    #[default]
    Warn,
    /// Stop the install with a non-zero exit.
    Abort,
}

/// Installer settings. Defaults reproduce the stock hubble install.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerProfile {
    /// Framework configuration file patched to register the plugin.
    pub config_file: String,
    /// Array key in the configuration file that receives the plugin entry.
    pub config_key: String,
    /// npm package installed as the plugin.
    pub plugin_package: String,
    /// Environment file receiving the API credentials.
    pub env_file: String,
    /// Template files created by the generator that get removed.
    pub default_files: Vec<String>,
    pub patch_failure: PatchFailurePolicy,
    /// Launcher used to run the project generator.
    pub generator_command: String,
    /// Package manager used to install the plugin.
    pub package_manager: String,
}

impl Default for InstallerProfile {
    fn default() -> Self {
        Self {
            config_file: "nuxt.config.js".into(),
            config_key: "modules".into(),
            plugin_package: "@hubblecommerce/hubble".into(),
            env_file: ".env".into(),
            default_files: vec!["pages/index.vue".into(), "layouts/default.vue".into()],
            patch_failure: PatchFailurePolicy::Warn,
            generator_command: "npx".into(),
            package_manager: "npm".into(),
        }
    }
}

impl InstallerProfile {
    /// Parse and validate a profile from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let profile: InstallerProfile = toml::from_str(content)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("config_file", &self.config_file),
            ("config_key", &self.config_key),
            ("plugin_package", &self.plugin_package),
            ("env_file", &self.env_file),
            ("generator_command", &self.generator_command),
            ("package_manager", &self.package_manager),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("Profile key '{}' must not be empty", key)));
            }
        }
        Ok(())
    }

    /// Replacement that registers the plugin as the first entry of `config_key`.
    pub fn module_registration(&self) -> Replacement {
        let needle = format!("{}: [", self.config_key);
        let replacer = format!("{}\n    ['{}']", needle, self.plugin_package);
        Replacement::new(needle, replacer)
    }
}
