pub mod credentials;
pub mod error;
pub mod generator_answers;
pub mod install_step;
pub mod patch;
pub mod profile;
pub mod project;

pub use credentials::ApiCredentials;
pub use error::AppError;
pub use generator_answers::GeneratorAnswers;
pub use install_step::InstallStep;
pub use patch::{PatchOutcome, Replacement, apply_all, apply_replacement};
pub use profile::{InstallerProfile, PatchFailurePolicy};
pub use project::ProjectName;
