use crate::application::dto::{RetentionOutcome, RunReport, SnapshotRequest};
use crate::application::use_cases::ResolveCandidateUseCase;
use crate::ports::outbound::{
    ContentComparator, HostProbe, InventoryRunner, ProgressReporter, SnapshotStore,
};
use crate::shared::error::SnapError;
use crate::shared::Result;
use crate::snapshot_retention::domain::{HostName, SnapshotKind, SnapshotName, StorageLocation};
use crate::snapshot_retention::policies::LocationRefinementPolicy;
use tracing::{debug, warn};

/// TakeSnapshotUseCase - Core use case for one scheduled snapshot run
///
/// This use case orchestrates the run using generic dependency injection
/// for all infrastructure dependencies.
///
/// # Type Parameters
/// * `HP` - HostProbe implementation
/// * `IR` - InventoryRunner implementation
/// * `SS` - SnapshotStore implementation
/// * `CC` - ContentComparator implementation
/// * `PR` - ProgressReporter implementation
pub struct TakeSnapshotUseCase<HP, IR, SS, CC, PR> {
    host_probe: HP,
    inventory_runner: IR,
    snapshot_store: SS,
    comparator: CC,
    progress_reporter: PR,
    refinement_policy: LocationRefinementPolicy,
}

impl<HP, IR, SS, CC, PR> TakeSnapshotUseCase<HP, IR, SS, CC, PR>
where
    HP: HostProbe,
    IR: InventoryRunner,
    SS: SnapshotStore,
    CC: ContentComparator,
    PR: ProgressReporter,
{
    /// Creates a new TakeSnapshotUseCase with injected dependencies
    pub fn new(
        host_probe: HP,
        inventory_runner: IR,
        snapshot_store: SS,
        comparator: CC,
        progress_reporter: PR,
        refinement_policy: LocationRefinementPolicy,
    ) -> Self {
        Self {
            host_probe,
            inventory_runner,
            snapshot_store,
            comparator,
            progress_reporter,
            refinement_policy,
        }
    }

    /// Executes one snapshot run
    ///
    /// # Arguments
    /// * `request` - Data root, optional pinned hostname and the run's timestamp
    ///
    /// # Returns
    /// RunReport with the storage location and one outcome per snapshot kind
    ///
    /// # Errors
    /// Any failure aborts the run. A failing inventory command leaves both
    /// provisional files in place and makes no retention decision.
    pub fn execute(&self, request: SnapshotRequest) -> Result<RunReport> {
        // Step 1: Resolve where this host's snapshots live
        let location = self.resolve_location(&request)?;

        // Step 2: Make sure the inventory tool is usable before doing any work
        self.inventory_runner.verify_available()?;

        // Step 3: Provisional files live in the storage location
        self.snapshot_store.ensure_location(&location)?;

        // Step 4: Run the inventory tool once, capturing both streams
        let [primary, secondary] =
            SnapshotKind::ALL.map(|kind| SnapshotName::new(kind, request.timestamp.clone()));
        self.run_inventory(&location, &primary, &secondary)?;

        // Step 5: Keep or discard each stream independently
        let mut report = RunReport::new(location, request.timestamp.clone());
        for name in [&primary, &secondary] {
            let outcome = self.resolve(&report.location, name)?;
            self.report_outcome(name.kind(), &outcome);
            report.outcomes.push((name.kind(), outcome));
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Snapshot run complete: {} of {} snapshot(s) retained in {}",
            report.retained_count(),
            report.outcomes.len(),
            report.location
        ));

        Ok(report)
    }

    /// Determines the host identity and applies the refinement policy
    fn resolve_location(&self, request: &SnapshotRequest) -> Result<StorageLocation> {
        let raw_name = match &request.pinned_hostname {
            Some(name) => name.clone(),
            None => self
                .host_probe
                .hostname()
                .map_err(|e| SnapError::HostnameLookup {
                    details: format!("{:#}", e),
                })?,
        };

        let host = HostName::new(&raw_name).map_err(|e| SnapError::InvalidHostname {
            name: raw_name.clone(),
            reason: e.to_string(),
        })?;

        let suffix = self.refinement_suffix(&host);
        let location = StorageLocation::new(&request.data_root, host, suffix);

        self.progress_reporter
            .report(&format!("📁 Storage location: {}", location));

        Ok(location)
    }

    /// Suffix from the first rule for `host`; an unreadable probe yields none
    fn refinement_suffix(&self, host: &HostName) -> Option<String> {
        let rule = self.refinement_policy.rule_for(host)?;

        match self.host_probe.read_probe(rule.probe()) {
            Ok(value) => {
                let suffix = rule.suffix_for(&value).map(str::to_string);
                debug!(
                    host = %host,
                    probe = %rule.probe().display(),
                    suffix = suffix.as_deref().unwrap_or(""),
                    "applied location refinement rule"
                );
                suffix
            }
            Err(e) => {
                let details = format!("{:#}", e);
                warn!(host = %host, error = %details, "refinement probe unreadable");
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Could not read {} for host '{}'; storing without suffix.",
                    rule.probe().display(),
                    host
                ));
                None
            }
        }
    }

    fn run_inventory(
        &self,
        location: &StorageLocation,
        primary: &SnapshotName,
        secondary: &SnapshotName,
    ) -> Result<()> {
        let stdout_path = location.provisional_path(primary);
        let stderr_path = location.provisional_path(secondary);

        self.progress_reporter.report_activity(&format!(
            "📦 Running inventory: {}",
            self.inventory_runner.describe()
        ));

        let exit = self.inventory_runner.run(&stdout_path, &stderr_path)?;

        if !exit.success() {
            self.progress_reporter.report_error(&format!(
                "❌ Inventory tool failed ({}); provisional files kept: {}, {}",
                exit,
                stdout_path.display(),
                stderr_path.display()
            ));
            return Err(SnapError::InventoryFailed {
                command: self.inventory_runner.describe(),
                status: exit.to_string(),
            }
            .into());
        }

        self.progress_reporter.report("✅ Inventory finished");
        Ok(())
    }

    fn resolve(&self, location: &StorageLocation, name: &SnapshotName) -> Result<RetentionOutcome> {
        let latest = self.snapshot_store.latest(location, name.kind())?;
        let candidate = location.provisional_path(name);
        let final_path = location.final_path(name);

        ResolveCandidateUseCase::new(&self.comparator, &self.snapshot_store).execute(
            latest.as_deref(),
            &candidate,
            &final_path,
        )
    }

    fn report_outcome(&self, kind: SnapshotKind, outcome: &RetentionOutcome) {
        let message = match outcome {
            RetentionOutcome::Retained { path } => {
                format!("💾 {} snapshot retained: {}", kind, path.display())
            }
            RetentionOutcome::Discarded { latest } => format!(
                "♻️  {} snapshot unchanged since {}; discarded",
                kind,
                latest
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default()
            ),
        };
        self.progress_reporter.report(&message);
    }
}
