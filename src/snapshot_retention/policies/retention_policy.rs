use crate::shared::error::SnapError;
use crate::shared::Result;
use crate::snapshot_retention::domain::ComparisonOutcome;
use std::path::Path;

/// What to do with a candidate snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionAction {
    /// Rename the candidate to its final name
    Promote,
    /// Delete the candidate; it duplicates the latest retained snapshot
    Discard,
}

/// RetentionPolicy decides the fate of a candidate snapshot
///
/// Rules:
/// 1. No latest snapshot of the kind: promote unconditionally
/// 2. Identical to latest: discard
/// 3. Different from latest: promote
/// 4. Comparator trouble or an unexpected outcome: abort the run
pub struct RetentionPolicy;

impl RetentionPolicy {
    /// Decision when the store holds no snapshot of the kind yet
    pub fn without_latest() -> RetentionAction {
        RetentionAction::Promote
    }

    /// Decision for a comparison against the latest retained snapshot
    ///
    /// # Errors
    /// `SnapError::ComparisonFailed` for comparator trouble and
    /// `SnapError::UnexpectedComparisonOutcome` for anything else it reports
    pub fn decide(
        outcome: &ComparisonOutcome,
        latest: &Path,
        candidate: &Path,
    ) -> Result<RetentionAction> {
        match outcome {
            ComparisonOutcome::Identical => Ok(RetentionAction::Discard),
            ComparisonOutcome::Different => Ok(RetentionAction::Promote),
            ComparisonOutcome::Trouble { details } => Err(SnapError::ComparisonFailed {
                latest: latest.to_path_buf(),
                candidate: candidate.to_path_buf(),
                details: details.clone(),
            }
            .into()),
            ComparisonOutcome::Unexpected { outcome } => {
                Err(SnapError::UnexpectedComparisonOutcome {
                    latest: latest.to_path_buf(),
                    candidate: candidate.to_path_buf(),
                    outcome: outcome.clone(),
                }
                .into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::FailureClass;

    fn decide(outcome: ComparisonOutcome) -> Result<RetentionAction> {
        RetentionPolicy::decide(
            &outcome,
            Path::new("rpmsnap.2024-01-01_00:00:00.txt"),
            Path::new("rpmsnap.2024-01-02_00:00:00.txt.new"),
        )
    }

    #[test]
    fn test_without_latest_promotes() {
        assert_eq!(RetentionPolicy::without_latest(), RetentionAction::Promote);
    }

    #[test]
    fn test_identical_discards() {
        assert_eq!(
            decide(ComparisonOutcome::Identical).unwrap(),
            RetentionAction::Discard
        );
    }

    #[test]
    fn test_different_promotes() {
        assert_eq!(
            decide(ComparisonOutcome::Different).unwrap(),
            RetentionAction::Promote
        );
    }

    #[test]
    fn test_trouble_is_comparison_failure() {
        let err = decide(ComparisonOutcome::Trouble {
            details: "Permission denied".to_string(),
        })
        .unwrap_err();

        let snap_err = err.downcast_ref::<SnapError>().unwrap();
        assert!(matches!(snap_err, SnapError::ComparisonFailed { .. }));
        assert_eq!(snap_err.class(), FailureClass::Comparison);
    }

    #[test]
    fn test_unexpected_outcome_is_fatal() {
        let err = decide(ComparisonOutcome::Unexpected {
            outcome: "exit status 42".to_string(),
        })
        .unwrap_err();

        let snap_err = err.downcast_ref::<SnapError>().unwrap();
        assert!(matches!(
            snap_err,
            SnapError::UnexpectedComparisonOutcome { .. }
        ));
        assert!(err.to_string().contains("exit status 42"));
    }
}
