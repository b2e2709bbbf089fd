/// Stages of an install, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    CreateProject,
    ScaffoldFramework,
    InstallPlugin,
    ConfigureFramework,
    PruneDefaults,
    WriteCredentials,
}

impl InstallStep {
    /// Progress message shown while the step runs.
    pub fn message(&self) -> &'static str {
        match self {
            InstallStep::CreateProject => "Installing hubble: create project directory",
            InstallStep::ScaffoldFramework => "Installing hubble: setup nuxt.js",
            InstallStep::InstallPlugin => "Installing hubble: install and configure hubble via npm",
            InstallStep::ConfigureFramework => "Installing hubble: register hubble module",
            InstallStep::PruneDefaults => "Installing hubble: remove nuxt.js default files",
            InstallStep::WriteCredentials => "Installing hubble: write API credentials",
        }
    }

    /// Steps that wait on an external process and deserve a spinner.
    pub fn is_long_running(&self) -> bool {
        matches!(self, InstallStep::ScaffoldFramework | InstallStep::InstallPlugin)
    }
}
