/// Mock implementations for testing
mod mock_content_comparator;
mod mock_host_probe;
mod mock_inventory_runner;
mod mock_progress_reporter;

pub use mock_content_comparator::MockContentComparator;
pub use mock_host_probe::MockHostProbe;
pub use mock_inventory_runner::MockInventoryRunner;
pub use mock_progress_reporter::MockProgressReporter;
