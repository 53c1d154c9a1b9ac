use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(120);

/// StderrProgressReporter adapter for narrating a run on stderr
///
/// This adapter implements the ProgressReporter port. Long steps get an
/// indicatif spinner, which draws to stderr and hides itself when stderr is
/// not a terminal (e.g. under cron).
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn start_spinner(&self, message: &str) {
        self.finish_spinner();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("   {spinner:.green} {msg} ({elapsed})")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }

    fn report_activity(&self, message: &str) {
        // Keep a plain line for non-terminal stderr, where the spinner is hidden
        eprintln!("{}", message);
        self.start_spinner(message);
    }

    fn report_error(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!();
        eprintln!("{}", message);
    }
}

impl Drop for StderrProgressReporter {
    fn drop(&mut self) {
        self.finish_spinner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        // Can't easily test stderr output, but verify it doesn't panic
        reporter.report("Test message");
        reporter.report_activity("Running something");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_activity_is_replaced_by_next_activity() {
        let reporter = StderrProgressReporter::default();
        reporter.report_activity("first");
        reporter.report_activity("second");
        assert!(reporter.spinner.borrow().is_some());
        reporter.report("done");
        assert!(reporter.spinner.borrow().is_none());
    }
}
