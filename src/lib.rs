//! rpmsnap - package-inventory snapshots with change-only retention
//!
//! Each run captures the output of an inventory command (typically an RPM
//! verification listing) into timestamped files under a per-host storage
//! location, and keeps the new files only if they differ from the latest
//! retained snapshot of the same kind.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`snapshot_retention`): Naming, ordering and retention rules
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//! - **Config** (`config`): YAML configuration and settings resolution
//!
//! # Example
//!
//! ```no_run
//! use rpmsnap::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let host_probe = SystemHostProbe::new();
//! let inventory = InventoryCommand::new(
//!     PathBuf::from("/usr/local/rpmsnap/sbin/rpmsnap.pl"),
//!     vec!["--verify".to_string()],
//! );
//! let store = FileSystemSnapshotStore::new();
//! let comparator = ByteComparator::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = TakeSnapshotUseCase::new(
//!     host_probe,
//!     inventory,
//!     store,
//!     comparator,
//!     progress_reporter,
//!     LocationRefinementPolicy::default(),
//! );
//!
//! // Execute
//! let request = SnapshotRequest::new(
//!     PathBuf::from("/usr/local/rpmsnap/data"),
//!     None,
//!     TimestampLabel::now(),
//! );
//! let report = use_case.execute(request)?;
//! eprintln!("{} snapshot(s) retained", report.retained_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod snapshot_retention;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{ByteComparator, FileSystemSnapshotStore};
    pub use crate::adapters::outbound::process::{CmpComparator, InventoryCommand};
    pub use crate::adapters::outbound::system::SystemHostProbe;
    pub use crate::application::dto::{ComparatorKind, RetentionOutcome, RunReport, SnapshotRequest};
    pub use crate::application::factories::ComparatorFactory;
    pub use crate::application::use_cases::{ResolveCandidateUseCase, TakeSnapshotUseCase};
    pub use crate::ports::outbound::{
        ContentComparator, HostProbe, InventoryExit, InventoryRunner, ProgressReporter,
        SnapshotStore,
    };
    pub use crate::shared::error::{ExitCode, SnapError};
    pub use crate::shared::Result;
    pub use crate::snapshot_retention::domain::{
        ComparisonOutcome, HostName, SnapshotKind, SnapshotName, StorageLocation, TimestampLabel,
    };
    pub use crate::snapshot_retention::policies::{
        LocationRefinementPolicy, LocationRule, RetentionAction, RetentionPolicy, SuffixMapping,
    };
    pub use crate::snapshot_retention::services::LatestSelector;
}
