pub mod configure_framework;
pub mod create_project;
pub mod credentials;
pub mod install;
pub mod install_plugin;
pub mod patch_file;
pub mod prune_defaults;
pub mod scaffold_framework;
