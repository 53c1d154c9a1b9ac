/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod comparator_kind;
mod run_report;
mod snapshot_request;

pub use comparator_kind::ComparatorKind;
pub use run_report::{RetentionOutcome, RunReport};
pub use snapshot_request::SnapshotRequest;
