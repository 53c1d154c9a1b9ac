use crate::snapshot_retention::domain::{SnapshotKind, SnapshotName};

/// LatestSelector picks the most recent retained snapshot of a kind
///
/// "Most recent" means lexicographically greatest file name among the names
/// matching the kind's pattern. This only equals chronological order because
/// the embedded timestamp is zero-padded and most-significant-first.
pub struct LatestSelector;

impl LatestSelector {
    /// Selects the latest retained snapshot name from a directory listing
    ///
    /// # Arguments
    /// * `kind` - Snapshot kind whose pattern names must match
    /// * `file_names` - File names found in the storage location, in any order
    ///
    /// # Returns
    /// The greatest matching name, or None if nothing matches
    pub fn select<I, S>(kind: SnapshotKind, file_names: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matching: Vec<String> = file_names
            .into_iter()
            .filter(|name| SnapshotName::matches_retained(kind, name.as_ref()))
            .map(|name| name.as_ref().to_string())
            .collect();

        matching.sort();
        matching.pop()
    }
}
