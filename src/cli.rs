use clap::Parser;
use rpmsnap::application::dto::ComparatorKind;
use rpmsnap::config::SettingsOverrides;
use std::path::PathBuf;

/// Keep timestamped package-inventory snapshots, retaining only changes
#[derive(Parser, Debug)]
#[command(name = "rpmsnap")]
#[command(version = "0.1.0")]
#[command(
    about = "Keep timestamped package-inventory snapshots, retaining only changes",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to <install-root>/rpmsnap.config.yml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Installation root; snapshots are stored below <install-root>/data
    #[arg(long, value_name = "DIR")]
    pub install_root: Option<PathBuf>,

    /// Use this host identity instead of looking it up
    #[arg(long, value_name = "NAME")]
    pub hostname: Option<String>,

    /// Comparator for the retention decision: builtin or cmp
    #[arg(long, value_name = "KIND")]
    pub comparator: Option<ComparatorKind>,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print an example config file to stdout and exit
    #[arg(long)]
    pub print_default_config: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            install_root: self.install_root.clone(),
            hostname: self.hostname.clone(),
            comparator: self.comparator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let args = Args::try_parse_from(["rpmsnap"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.install_root.is_none());
        assert!(args.hostname.is_none());
        assert!(args.comparator.is_none());
        assert!(!args.verbose);
        assert!(!args.print_default_config);
    }

    #[test]
    fn test_all_arguments() {
        let args = Args::try_parse_from([
            "rpmsnap",
            "--config",
            "/etc/rpmsnap.yml",
            "--install-root",
            "/opt/rpmsnap",
            "--hostname",
            "buildhost",
            "--comparator",
            "cmp",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/etc/rpmsnap.yml")));
        assert_eq!(args.install_root, Some(PathBuf::from("/opt/rpmsnap")));
        assert_eq!(args.hostname.as_deref(), Some("buildhost"));
        assert_eq!(args.comparator, Some(ComparatorKind::Cmp));
        assert!(args.verbose);
    }

    #[test]
    fn test_invalid_comparator() {
        let result = Args::try_parse_from(["rpmsnap", "--comparator", "diff"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_carry_cli_values() {
        let args =
            Args::try_parse_from(["rpmsnap", "--install-root", "/srv", "--hostname", "h"]).unwrap();
        let overrides = args.overrides();
        assert_eq!(overrides.install_root, Some(PathBuf::from("/srv")));
        assert_eq!(overrides.hostname.as_deref(), Some("h"));
        assert!(overrides.comparator.is_none());
    }
}
