/// Filesystem adapters for snapshot storage and comparison
mod byte_comparator;
mod snapshot_directory;

pub use byte_comparator::ByteComparator;
pub use snapshot_directory::FileSystemSnapshotStore;
