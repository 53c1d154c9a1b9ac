use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A scheduler only needs to tell "fine" from "look at the logs", so every
/// fatal condition shares one code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Run finished; snapshots were retained or discarded as duplicates
    Success = 0,
    /// Any fatal condition aborted the run
    Fatal = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Fatal => write!(f, "Fatal (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Coarse grouping of fatal conditions, shown in the error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Hostname, tool resolution or configuration failed before any work
    EnvironmentSetup,
    /// The inventory command could not run or exited non-zero
    ExternalCommand,
    /// The storage location could not be created or mutated
    Storage,
    /// The content comparison itself failed
    Comparison,
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureClass::EnvironmentSetup => write!(f, "environment setup failure"),
            FailureClass::ExternalCommand => write!(f, "external command failure"),
            FailureClass::Storage => write!(f, "storage failure"),
            FailureClass::Comparison => write!(f, "comparison failure"),
        }
    }
}

/// Application-specific errors for a snapshot run.
///
/// Every variant is fatal for the current run; the next scheduled
/// invocation is the only retry.
#[derive(Debug, Error)]
pub enum SnapError {
    #[error("Failed to determine the hostname\nDetails: {details}\n\n💡 Hint: Pin the host identity with --hostname or the 'hostname' config field")]
    HostnameLookup { details: String },

    #[error("Invalid hostname: '{name}'\nReason: {reason}")]
    InvalidHostname { name: String, reason: String },

    #[error("Inventory tool is not usable: {path}\nReason: {reason}\n\n💡 Hint: Check 'inventory.program' in the config and that the file is executable")]
    InventoryToolUnavailable { path: PathBuf, reason: String },

    #[error("Failed to launch inventory tool: {program}\nDetails: {details}")]
    InventoryLaunch { program: PathBuf, details: String },

    #[error("Inventory tool failed: '{command}' ended with {status}\n\n💡 Hint: Provisional output was left in place for inspection")]
    InventoryFailed { command: String, status: String },

    #[error("Failed to create storage location: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions below the install root")]
    StorageCreate { path: PathBuf, details: String },

    #[error("Failed to list storage location: {path}\nDetails: {details}")]
    StorageList { path: PathBuf, details: String },

    #[error("Snapshot already exists: {path}\n\n💡 Hint: Another run used the same timestamp; retained snapshots are never overwritten")]
    FinalNameTaken { path: PathBuf },

    #[error("Failed to retain snapshot {from} as {to}\nDetails: {details}")]
    Promote {
        from: PathBuf,
        to: PathBuf,
        details: String,
    },

    #[error("Failed to discard duplicate snapshot: {path}\nDetails: {details}")]
    Discard { path: PathBuf, details: String },

    #[error("Failed to compare {candidate} against {latest}\nDetails: {details}")]
    ComparisonFailed {
        latest: PathBuf,
        candidate: PathBuf,
        details: String,
    },

    #[error("Comparison of {candidate} against {latest} returned an unexpected outcome: {outcome}")]
    UnexpectedComparisonOutcome {
        latest: PathBuf,
        candidate: PathBuf,
        outcome: String,
    },
}

impl SnapError {
    pub fn class(&self) -> FailureClass {
        match self {
            SnapError::HostnameLookup { .. }
            | SnapError::InvalidHostname { .. }
            | SnapError::InventoryToolUnavailable { .. } => FailureClass::EnvironmentSetup,
            SnapError::InventoryLaunch { .. } | SnapError::InventoryFailed { .. } => {
                FailureClass::ExternalCommand
            }
            SnapError::StorageCreate { .. }
            | SnapError::StorageList { .. }
            | SnapError::FinalNameTaken { .. }
            | SnapError::Promote { .. }
            | SnapError::Discard { .. } => FailureClass::Storage,
            SnapError::ComparisonFailed { .. } | SnapError::UnexpectedComparisonOutcome { .. } => {
                FailureClass::Comparison
            }
        }
    }
}

/// First line of the fatal-error banner printed by `main`
///
/// Errors outside the `SnapError` taxonomy (configuration, I/O context)
/// get the plain banner.
pub fn error_banner(error: &anyhow::Error) -> String {
    match error.downcast_ref::<SnapError>() {
        Some(snap_error) => format!("❌ An error occurred ({}):", snap_error.class()),
        None => "❌ An error occurred:".to_string(),
    }
}
