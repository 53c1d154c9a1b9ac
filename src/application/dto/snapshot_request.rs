use crate::snapshot_retention::domain::TimestampLabel;
use std::path::PathBuf;

/// SnapshotRequest - Internal request DTO for one snapshot run
#[derive(Debug, Clone)]
pub struct SnapshotRequest {
    /// Directory under which per-host storage locations live
    pub data_root: PathBuf,
    /// Host identity to use instead of looking it up
    pub pinned_hostname: Option<String>,
    /// Timestamp label shared by both snapshots of the run
    pub timestamp: TimestampLabel,
}

impl SnapshotRequest {
    pub fn new(
        data_root: PathBuf,
        pinned_hostname: Option<String>,
        timestamp: TimestampLabel,
    ) -> Self {
        Self {
            data_root,
            pinned_hostname,
            timestamp,
        }
    }
}
