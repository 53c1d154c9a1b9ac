use rpmsnap::prelude::*;
use std::fs;
use std::path::Path;

/// Mock InventoryRunner that writes canned output to the given files
pub struct MockInventoryRunner {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
    pub available: bool,
}

impl MockInventoryRunner {
    pub fn new(stdout: &str, stderr: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            exit_code: Some(0),
            available: true,
        }
    }

    pub fn with_exit_code(mut self, code: Option<i32>) -> Self {
        self.exit_code = code;
        self
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new("", "")
        }
    }
}

impl InventoryRunner for MockInventoryRunner {
    fn describe(&self) -> String {
        "mock-inventory --verify".to_string()
    }

    fn verify_available(&self) -> Result<()> {
        if !self.available {
            return Err(SnapError::InventoryToolUnavailable {
                path: "mock-inventory".into(),
                reason: "Mock tool missing".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn run(&self, stdout_path: &Path, stderr_path: &Path) -> Result<InventoryExit> {
        fs::write(stdout_path, &self.stdout)?;
        fs::write(stderr_path, &self.stderr)?;
        Ok(InventoryExit::new(self.exit_code))
    }
}
