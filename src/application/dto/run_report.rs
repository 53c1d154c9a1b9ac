use crate::snapshot_retention::domain::{SnapshotKind, StorageLocation, TimestampLabel};
use std::path::PathBuf;

/// What happened to one candidate snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetentionOutcome {
    /// Candidate now lives at `path`
    Retained { path: PathBuf },
    /// Candidate was deleted as a duplicate of `latest`
    Discarded { latest: PathBuf },
}

impl RetentionOutcome {
    pub fn is_retained(&self) -> bool {
        matches!(self, RetentionOutcome::Retained { .. })
    }
}

/// RunReport - Internal response DTO of a snapshot run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub location: StorageLocation,
    pub timestamp: TimestampLabel,
    /// One entry per snapshot kind, in processing order
    pub outcomes: Vec<(SnapshotKind, RetentionOutcome)>,
}

impl RunReport {
    pub fn new(location: StorageLocation, timestamp: TimestampLabel) -> Self {
        Self {
            location,
            timestamp,
            outcomes: Vec::new(),
        }
    }

    pub fn outcome(&self, kind: SnapshotKind) -> Option<&RetentionOutcome> {
        self.outcomes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, outcome)| outcome)
    }

    pub fn retained_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_retained())
            .count()
    }
}
