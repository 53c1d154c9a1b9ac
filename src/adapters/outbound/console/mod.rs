/// Console adapters for run narration
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
