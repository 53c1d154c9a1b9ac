use crate::shared::Result;
use std::fmt;
use std::path::Path;

/// How the inventory command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryExit {
    code: Option<i32>,
}

impl InventoryExit {
    /// `None` means the process was terminated by a signal
    pub fn new(code: Option<i32>) -> Self {
        Self { code }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl fmt::Display for InventoryExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => write!(f, "termination by signal"),
        }
    }
}

/// InventoryRunner port for the external inventory-producing command
pub trait InventoryRunner {
    /// Human-readable command line for narration
    fn describe(&self) -> String;

    /// Checks that the tool can be run at all, before any work starts
    ///
    /// # Errors
    /// Returns `SnapError::InventoryToolUnavailable` if the tool is missing or not executable
    fn verify_available(&self) -> Result<()>;

    /// Runs the tool once, writing its standard output and standard error to
    /// the given files
    ///
    /// # Returns
    /// The exit status; a non-zero status is not an error at this level
    ///
    /// # Errors
    /// Returns an error if the output files cannot be created or the process cannot be launched
    fn run(&self, stdout_path: &Path, stderr_path: &Path) -> Result<InventoryExit>;
}
