use crate::ports::outbound::{InventoryExit, InventoryRunner};
use crate::shared::error::SnapError;
use crate::shared::security;
use crate::shared::Result;
use anyhow::Context;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// InventoryCommand adapter running the inventory tool as a child process
///
/// Both output streams go straight into files, so nothing is buffered in
/// memory regardless of inventory size. The command has no timeout.
pub struct InventoryCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl InventoryCommand {
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl InventoryRunner for InventoryCommand {
    fn describe(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn verify_available(&self) -> Result<()> {
        security::validate_executable(&self.program, "inventory tool").map_err(|e| {
            SnapError::InventoryToolUnavailable {
                path: self.program.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(())
    }

    fn run(&self, stdout_path: &Path, stderr_path: &Path) -> Result<InventoryExit> {
        let stdout_file = File::create(stdout_path).with_context(|| {
            format!("Failed to create provisional file {}", stdout_path.display())
        })?;
        let stderr_file = File::create(stderr_path).with_context(|| {
            format!("Failed to create provisional file {}", stderr_path.display())
        })?;

        debug!(command = %self.describe(), "launching inventory command");
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout_file))
            .stderr(Stdio::from(stderr_file))
            .status()
            .map_err(|e| SnapError::InventoryLaunch {
                program: self.program.clone(),
                details: e.to_string(),
            })?;

        let exit = InventoryExit::new(status.code());
        debug!(%exit, "inventory command finished");
        Ok(exit)
    }
}
