mod cli;

use cli::Args;
use rpmsnap::adapters::outbound::console::StderrProgressReporter;
use rpmsnap::adapters::outbound::filesystem::FileSystemSnapshotStore;
use rpmsnap::adapters::outbound::process::InventoryCommand;
use rpmsnap::adapters::outbound::system::SystemHostProbe;
use rpmsnap::application::dto::SnapshotRequest;
use rpmsnap::application::factories::ComparatorFactory;
use rpmsnap::application::use_cases::TakeSnapshotUseCase;
use rpmsnap::config::{self, ConfigFile, Settings, CONFIG_FILENAME, DEFAULT_INSTALL_ROOT};
use rpmsnap::shared::error::{error_banner, ExitCode};
use rpmsnap::shared::Result;
use rpmsnap::snapshot_retention::domain::TimestampLabel;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();

    if args.print_default_config {
        print!("{}", config::EXAMPLE_CONFIG);
        return;
    }

    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", error_banner(&e));
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::Fatal.as_i32());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config_file = load_config(&args)?;
    let settings = Settings::resolve(args.overrides(), config_file);
    debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let host_probe = SystemHostProbe::new();
    let inventory = InventoryCommand::new(
        settings.inventory_program.clone(),
        settings.inventory_args.clone(),
    );
    let snapshot_store = FileSystemSnapshotStore::new();
    let comparator = ComparatorFactory::create(settings.comparator);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = TakeSnapshotUseCase::new(
        host_probe,
        inventory,
        snapshot_store,
        comparator,
        progress_reporter,
        settings.refinement_policy.clone(),
    );

    let request = SnapshotRequest::new(
        settings.data_root(),
        settings.hostname.clone(),
        TimestampLabel::now(),
    );

    let report = use_case.execute(request)?;
    for (kind, outcome) in &report.outcomes {
        debug!(%kind, ?outcome, "retention outcome");
    }

    Ok(())
}

/// Explicit `--config` must exist; otherwise look in the install root.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        let config = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(Some(config));
    }

    let install_root = args
        .install_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_ROOT));
    let config = config::discover_config(&install_root)?;
    if config.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            install_root.join(CONFIG_FILENAME).display()
        );
    }
    Ok(config)
}
