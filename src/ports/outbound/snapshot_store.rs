use crate::shared::Result;
use crate::snapshot_retention::domain::{SnapshotKind, StorageLocation};
use crate::snapshot_retention::services::LatestSelector;
use std::path::{Path, PathBuf};

/// SnapshotStore port for the directory of retained snapshots
///
/// Retained snapshots are only ever added: the store exposes a rename into
/// place and a delete of provisional files, nothing that rewrites content.
pub trait SnapshotStore {
    /// Creates the storage location if it does not exist yet
    ///
    /// # Errors
    /// Returns `SnapError::StorageCreate` on failure
    fn ensure_location(&self, location: &StorageLocation) -> Result<()>;

    /// Lists the file names present in the storage location
    fn list_file_names(&self, location: &StorageLocation) -> Result<Vec<String>>;

    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Renames a candidate to its final name
    fn promote(&self, candidate: &Path, final_path: &Path) -> Result<()>;

    /// Deletes a candidate
    fn discard(&self, candidate: &Path) -> Result<()>;

    /// Path of the latest retained snapshot of `kind`, if any
    fn latest(&self, location: &StorageLocation, kind: SnapshotKind) -> Result<Option<PathBuf>> {
        let names = self.list_file_names(location)?;
        Ok(LatestSelector::select(kind, names).map(|name| location.directory().join(name)))
    }
}
