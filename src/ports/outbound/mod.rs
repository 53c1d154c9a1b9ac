/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, processes, console, etc.).
pub mod content_comparator;
pub mod host_probe;
pub mod inventory_runner;
pub mod progress_reporter;
pub mod snapshot_store;

pub use content_comparator::ContentComparator;
pub use host_probe::HostProbe;
pub use inventory_runner::{InventoryExit, InventoryRunner};
pub use progress_reporter::ProgressReporter;
pub use snapshot_store::SnapshotStore;
