pub mod comparison;
pub mod snapshot_kind;
pub mod snapshot_name;
pub mod storage_location;

pub use comparison::ComparisonOutcome;
pub use snapshot_kind::SnapshotKind;
pub use snapshot_name::{SnapshotName, TimestampLabel};
pub use storage_location::{HostName, StorageLocation};
