//! hubble-installer: scaffold a Nuxt.js project wired up with the hubble PWA module.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{InstallOptions, InstallOutcome, PatchReport, PruneReport, install, install_in};
pub use domain::{AppError, InstallerProfile, PatchFailurePolicy};
