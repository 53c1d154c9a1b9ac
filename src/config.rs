//! Configuration file support for rpmsnap.
//!
//! Provides YAML-based configuration through `rpmsnap.config.yml` files,
//! including data structures, file loading, validation and the merge of
//! command-line overrides, file values and built-in defaults into
//! [`Settings`].

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::ComparatorKind;
use crate::shared::Result;
use crate::snapshot_retention::policies::{LocationRefinementPolicy, LocationRule, SuffixMapping};

pub const CONFIG_FILENAME: &str = "rpmsnap.config.yml";
pub const DEFAULT_INSTALL_ROOT: &str = "/usr/local/rpmsnap";
const DEFAULT_INVENTORY_PROGRAM: &str = "sbin/rpmsnap.pl";
const DEFAULT_INVENTORY_ARGS: &[&str] = &["--verify"];
const DATA_DIR: &str = "data";

/// Commented example configuration printed by `--print-default-config`.
pub const EXAMPLE_CONFIG: &str = r#"# rpmsnap configuration
#
# Place this file at <install-root>/rpmsnap.config.yml or pass it with --config.
# Every field is optional; command-line flags take precedence.

# Root of the installation; snapshots live below <install_root>/data/
install_root: /usr/local/rpmsnap

# Pin the host identity instead of asking the system
# hostname: buildhost

inventory:
  # Relative paths resolve against install_root
  program: sbin/rpmsnap.pl
  args:
    - --verify

# builtin (in-process byte comparison) or cmp (external `cmp -s`)
comparator: builtin

# Hosts whose storage directory gets a suffix derived from a probe file.
# The first rule matching the hostname applies; within a rule the first
# suffix whose 'contains' text occurs in the probe file wins.
location_rules:
  - host: multiboot
    probe: /etc/redhat-release
    suffixes:
      - contains: "Fedora release 17"
        suffix: _F17
      - contains: "Fedora release 18"
        suffix: _F18
"#;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub install_root: Option<PathBuf>,
    pub hostname: Option<String>,
    pub inventory: Option<InventoryConfig>,
    pub comparator: Option<ComparatorKind>,
    pub location_rules: Option<Vec<LocationRuleConfig>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The inventory command line.
#[derive(Debug, Deserialize, Default)]
pub struct InventoryConfig {
    pub program: Option<PathBuf>,
    pub args: Option<Vec<String>>,
}

/// A host whose storage location is refined by a probe file.
#[derive(Debug, Deserialize)]
pub struct LocationRuleConfig {
    pub host: String,
    pub probe: PathBuf,
    #[serde(default)]
    pub suffixes: Vec<SuffixConfig>,
}

/// A probe value pattern and the suffix it selects.
#[derive(Debug, Deserialize)]
pub struct SuffixConfig {
    pub contains: String,
    pub suffix: String,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref rules) = config.location_rules {
        for (i, rule) in rules.iter().enumerate() {
            if rule.host.trim().is_empty() {
                bail!(
                    "Invalid config: location_rules[{}].host must not be empty.\n\n\
                     💡 Hint: Each location rule must name the host it applies to.",
                    i
                );
            }
            for (j, mapping) in rule.suffixes.iter().enumerate() {
                if mapping.contains.is_empty() {
                    bail!(
                        "Invalid config: location_rules[{}].suffixes[{}].contains must not be empty.\n\n\
                         💡 Hint: An empty pattern would match every probe value.",
                        i,
                        j
                    );
                }
                if let Some(reason) = suffix_problem(rule.host.trim(), &mapping.suffix) {
                    bail!(
                        "Invalid config: location_rules[{}].suffixes[{}].suffix '{}' {}.\n\n\
                         💡 Hint: The suffix is appended to the host's directory name below <install-root>/data.",
                        i,
                        j,
                        mapping.suffix,
                        reason
                    );
                }
            }
        }
    }

    if let Some(ref inventory) = config.inventory {
        if let Some(ref program) = inventory.program {
            if program.as_os_str().is_empty() {
                bail!("Invalid config: inventory.program must not be empty.");
            }
        }
    }

    Ok(())
}

/// Why `suffix` cannot extend `host` into a single directory name, if it cannot.
fn suffix_problem(host: &str, suffix: &str) -> Option<&'static str> {
    if suffix.contains('/') || suffix.contains('\\') {
        return Some("must not contain path separators");
    }
    if suffix.contains('\0') {
        return Some("must not contain NUL characters");
    }
    let directory = format!("{}{}", host, suffix);
    if directory == "." || directory == ".." {
        return Some("would turn the directory name into a relative path component");
    }
    None
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; each one beats the config file.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub install_root: Option<PathBuf>,
    pub hostname: Option<String>,
    pub comparator: Option<ComparatorKind>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub install_root: PathBuf,
    pub hostname: Option<String>,
    pub inventory_program: PathBuf,
    pub inventory_args: Vec<String>,
    pub comparator: ComparatorKind,
    pub refinement_policy: LocationRefinementPolicy,
}

impl Settings {
    /// Merges overrides, an optional config file and the built-in defaults.
    pub fn resolve(overrides: SettingsOverrides, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();
        let inventory = config.inventory.unwrap_or_default();

        let install_root = overrides
            .install_root
            .or(config.install_root)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INSTALL_ROOT));

        let program = inventory
            .program
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY_PROGRAM));
        let inventory_program = if program.is_relative() {
            install_root.join(program)
        } else {
            program
        };

        let inventory_args = inventory.args.unwrap_or_else(|| {
            DEFAULT_INVENTORY_ARGS
                .iter()
                .map(|arg| arg.to_string())
                .collect()
        });

        let rules = config
            .location_rules
            .unwrap_or_default()
            .into_iter()
            .map(|rule| {
                LocationRule::new(
                    rule.host.trim(),
                    rule.probe,
                    rule.suffixes
                        .into_iter()
                        .map(|s| SuffixMapping::new(s.contains, s.suffix))
                        .collect(),
                )
            })
            .collect();

        Self {
            install_root,
            hostname: overrides.hostname.or(config.hostname),
            inventory_program,
            inventory_args,
            comparator: overrides
                .comparator
                .or(config.comparator)
                .unwrap_or_default(),
            refinement_policy: LocationRefinementPolicy::new(rules),
        }
    }

    /// Directory holding one storage location per host
    pub fn data_root(&self) -> PathBuf {
        self.install_root.join(DATA_DIR)
    }
}
