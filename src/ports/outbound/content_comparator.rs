use crate::shared::Result;
use crate::snapshot_retention::domain::ComparisonOutcome;
use std::path::Path;

/// ContentComparator port for comparing a candidate snapshot with the latest one
///
/// Implementations report what they observed as a `ComparisonOutcome`,
/// including their own trouble. The `Err` path is reserved for failures
/// outside the comparison itself.
pub trait ContentComparator {
    /// Short name used in narration and logs
    fn name(&self) -> &'static str;

    /// Compares two files byte for byte
    ///
    /// # Arguments
    /// * `latest` - The latest retained snapshot
    /// * `candidate` - The provisional snapshot of the current run
    fn compare(&self, latest: &Path, candidate: &Path) -> Result<ComparisonOutcome>;
}

impl<T: ContentComparator + ?Sized> ContentComparator for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn compare(&self, latest: &Path, candidate: &Path) -> Result<ComparisonOutcome> {
        (**self).compare(latest, candidate)
    }
}
