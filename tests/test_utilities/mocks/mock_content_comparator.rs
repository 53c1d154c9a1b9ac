use rpmsnap::prelude::*;
use std::path::Path;

/// Mock ContentComparator returning a fixed outcome for every comparison
pub struct MockContentComparator {
    pub outcome: ComparisonOutcome,
}

impl MockContentComparator {
    pub fn new(outcome: ComparisonOutcome) -> Self {
        Self { outcome }
    }
}

impl ContentComparator for MockContentComparator {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn compare(&self, _latest: &Path, _candidate: &Path) -> Result<ComparisonOutcome> {
        Ok(self.outcome.clone())
    }
}
