//! CLI Adapter.

mod output;
mod logging;

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{self, InstallOptions};
use crate::app::config::load_profile;
use crate::domain::AppError;

#[derive(Parser, Debug)]
#[command(name = "hubble-installer")]
#[command(version)]
#[command(
    about = "Scaffold a Nuxt.js project with the hubble PWA module",
    long_about = None
)]
struct Cli {
    /// Name of the project directory to create
    project_name: Option<String>,
    /// API base URL written to .env (prompted when omitted)
    api_base_url: Option<String>,
    /// API access key written to .env (prompted when omitted)
    api_access_key: Option<String>,
    /// Abort when nuxt.config.js or .env cannot be patched
    #[arg(long)]
    strict: bool,
    /// Installer profile (TOML) overriding the built-in defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    output::clear_screen();
    output::print_banner();

    match run_install(cli) {
        Ok(()) => {
            output::clear_screen();
            output::print_success();
        }
        Err(e) => {
            tracing::debug!(error = ?e, "install failed");
            output::print_error(&e);
            std::process::exit(-1);
        }
    }
}

fn run_install(cli: Cli) -> Result<(), AppError> {
    let profile = load_profile(cli.config.as_deref())?;
    let options = InstallOptions {
        project_name: cli.project_name,
        api_base_url: cli.api_base_url,
        api_access_key: cli.api_access_key,
        profile,
        strict: cli.strict,
    };

    let outcome = api::install(options)?;
    tracing::info!(
        root = %outcome.project_root.display(),
        removed = outcome.pruned.removed.len(),
        "install complete"
    );
    Ok(())
}
