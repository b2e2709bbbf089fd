use std::cell::RefCell;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::InstallStep;
use crate::ports::ProgressReporter;

/// Reports progress on the terminal with spinners for process-bound steps.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn create_spinner(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let spinner_style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(spinner_style);
        pb.set_message(style(message).magenta().to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

impl ProgressReporter for ConsoleReporter {
    fn step_started(&self, step: InstallStep) {
        tracing::info!(step = ?step, "step started");
        if step.is_long_running() {
            *self.spinner.borrow_mut() = Some(Self::create_spinner(step.message()));
        }
    }

    fn step_finished(&self, step: InstallStep) {
        tracing::info!(step = ?step, "step finished");
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_with_message(format!(
                "{} {}",
                style("✔").green(),
                style(step.message()).magenta()
            ));
        }
    }

    fn step_failed(&self, step: InstallStep) {
        tracing::debug!(step = ?step, "step failed");
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.abandon_with_message(format!(
                "{} {}",
                style("✖").red(),
                style(step.message()).magenta()
            ));
        }
    }

    fn file_removed(&self, path: &str) {
        println!("{} {}", style("✔").green(), style(format!("Removed file {}", path)).magenta());
    }

    fn file_skipped(&self, path: &str) {
        println!(
            "{} {}",
            style("✔").green(),
            style(format!("File {} already removed. Skipping", path)).magenta()
        );
    }

    fn warning(&self, message: &str) {
        tracing::debug!(warning = message, "warning reported");
        println!("{} {}", style("!").yellow().bold(), message);
    }
}
