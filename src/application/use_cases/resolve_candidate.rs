use crate::application::dto::RetentionOutcome;
use crate::ports::outbound::{ContentComparator, SnapshotStore};
use crate::shared::error::SnapError;
use crate::shared::Result;
use crate::snapshot_retention::policies::{RetentionAction, RetentionPolicy};
use std::path::Path;
use tracing::debug;

/// ResolveCandidateUseCase - keep-or-delete decision for one candidate snapshot
///
/// Performs exactly one filesystem mutation per successful call: the
/// candidate is either renamed to its final name or deleted. The latest
/// retained snapshot is only ever read. On error nothing has been mutated.
pub struct ResolveCandidateUseCase<'a, C: ?Sized, S: ?Sized> {
    comparator: &'a C,
    store: &'a S,
}

impl<'a, C, S> ResolveCandidateUseCase<'a, C, S>
where
    C: ContentComparator + ?Sized,
    S: SnapshotStore + ?Sized,
{
    pub fn new(comparator: &'a C, store: &'a S) -> Self {
        Self { comparator, store }
    }

    /// Resolves a candidate against the latest retained snapshot of its kind
    ///
    /// # Arguments
    /// * `latest` - Latest retained snapshot, or None if the store has none yet
    /// * `candidate` - Provisional snapshot produced by this run
    /// * `final_path` - Name the candidate takes if retained
    ///
    /// # Errors
    /// Returns an error if the comparison fails or reports an unexpected
    /// outcome, if `final_path` is already taken, or if the rename/delete fails
    pub fn execute(
        &self,
        latest: Option<&Path>,
        candidate: &Path,
        final_path: &Path,
    ) -> Result<RetentionOutcome> {
        let action = match latest {
            None => RetentionPolicy::without_latest(),
            Some(latest) => {
                let outcome = self.comparator.compare(latest, candidate)?;
                debug!(
                    comparator = self.comparator.name(),
                    %outcome,
                    latest = %latest.display(),
                    candidate = %candidate.display(),
                    "compared candidate"
                );
                RetentionPolicy::decide(&outcome, latest, candidate)?
            }
        };

        match action {
            RetentionAction::Promote => {
                if self.store.exists(final_path) {
                    return Err(SnapError::FinalNameTaken {
                        path: final_path.to_path_buf(),
                    }
                    .into());
                }
                self.store.promote(candidate, final_path)?;
                Ok(RetentionOutcome::Retained {
                    path: final_path.to_path_buf(),
                })
            }
            RetentionAction::Discard => {
                self.store.discard(candidate)?;
                Ok(RetentionOutcome::Discarded {
                    // Discard is only reachable through a comparison with a latest snapshot
                    latest: latest.map(Path::to_path_buf).unwrap_or_default(),
                })
            }
        }
    }
}
