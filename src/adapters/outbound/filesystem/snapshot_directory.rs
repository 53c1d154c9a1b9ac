use crate::ports::outbound::SnapshotStore;
use crate::shared::error::SnapError;
use crate::shared::Result;
use crate::snapshot_retention::domain::StorageLocation;
use std::fs;
use std::path::Path;
use tracing::debug;

/// FileSystemSnapshotStore adapter keeping snapshots as plain files
///
/// This adapter implements the SnapshotStore port on top of one directory
/// per storage location.
pub struct FileSystemSnapshotStore;

impl FileSystemSnapshotStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemSnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for FileSystemSnapshotStore {
    fn ensure_location(&self, location: &StorageLocation) -> Result<()> {
        let directory = location.directory();

        if directory.is_dir() {
            return Ok(());
        }

        debug!(path = %directory.display(), "creating storage location");
        fs::create_dir_all(directory).map_err(|e| SnapError::StorageCreate {
            path: directory.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }

    fn list_file_names(&self, location: &StorageLocation) -> Result<Vec<String>> {
        let directory = location.directory();
        let list_error = |e: std::io::Error| SnapError::StorageList {
            path: directory.to_path_buf(),
            details: e.to_string(),
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(directory).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            // Follows symlinks; dangling links are skipped
            match fs::metadata(entry.path()) {
                Ok(metadata) if metadata.is_file() => {}
                _ => continue,
            }
            // Snapshot names are ASCII; anything else cannot match a pattern
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn promote(&self, candidate: &Path, final_path: &Path) -> Result<()> {
        debug!(from = %candidate.display(), to = %final_path.display(), "promoting candidate");
        fs::rename(candidate, final_path).map_err(|e| SnapError::Promote {
            from: candidate.to_path_buf(),
            to: final_path.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    fn discard(&self, candidate: &Path) -> Result<()> {
        debug!(path = %candidate.display(), "discarding duplicate candidate");
        fs::remove_file(candidate).map_err(|e| SnapError::Discard {
            path: candidate.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
