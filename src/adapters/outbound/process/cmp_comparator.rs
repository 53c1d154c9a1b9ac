use crate::ports::outbound::ContentComparator;
use crate::shared::Result;
use crate::snapshot_retention::domain::ComparisonOutcome;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

const DEFAULT_CMP_PROGRAM: &str = "cmp";

/// CmpComparator adapter delegating the comparison to `cmp -s`
///
/// Exit status mapping: 0 identical, 1 different, 2 trouble. Any other
/// status, or death by signal, is reported as unexpected.
pub struct CmpComparator {
    program: PathBuf,
}

impl CmpComparator {
    pub fn new() -> Self {
        Self::with_program(PathBuf::from(DEFAULT_CMP_PROGRAM))
    }

    /// Uses a specific `cmp`-compatible executable
    pub fn with_program(program: PathBuf) -> Self {
        Self { program }
    }

    fn outcome_for(code: Option<i32>) -> ComparisonOutcome {
        match code {
            Some(0) => ComparisonOutcome::Identical,
            Some(1) => ComparisonOutcome::Different,
            Some(2) => ComparisonOutcome::Trouble {
                details: format!("{} reported trouble (exit status 2)", DEFAULT_CMP_PROGRAM),
            },
            Some(code) => ComparisonOutcome::Unexpected {
                outcome: format!("exit status {}", code),
            },
            None => ComparisonOutcome::Unexpected {
                outcome: "termination by signal".to_string(),
            },
        }
    }
}

impl Default for CmpComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentComparator for CmpComparator {
    fn name(&self) -> &'static str {
        "cmp"
    }

    fn compare(&self, latest: &Path, candidate: &Path) -> Result<ComparisonOutcome> {
        debug!(
            program = %self.program.display(),
            latest = %latest.display(),
            candidate = %candidate.display(),
            "running external comparison"
        );

        let status = Command::new(&self.program)
            .arg("-s")
            .arg(latest)
            .arg(candidate)
            .stdin(Stdio::null())
            .status();

        Ok(match status {
            Ok(status) => Self::outcome_for(status.code()),
            Err(e) => ComparisonOutcome::Trouble {
                details: format!("Failed to run {}: {}", self.program.display(), e),
            },
        })
    }
}
