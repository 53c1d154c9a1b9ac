use std::fmt;

/// Result of comparing a candidate snapshot against the latest retained one
///
/// `Trouble` and `Unexpected` are reported by comparators rather than raised
/// as errors so the retention decision owns the choice to abort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonOutcome {
    /// Byte-for-byte identical
    Identical,
    /// Contents differ
    Different,
    /// The comparator could not do its job (unreadable file, tool error)
    Trouble { details: String },
    /// The comparator reported something outside its documented outcomes
    Unexpected { outcome: String },
}

impl fmt::Display for ComparisonOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOutcome::Identical => write!(f, "identical"),
            ComparisonOutcome::Different => write!(f, "different"),
            ComparisonOutcome::Trouble { details } => write!(f, "trouble ({})", details),
            ComparisonOutcome::Unexpected { outcome } => write!(f, "unexpected ({})", outcome),
        }
    }
}
