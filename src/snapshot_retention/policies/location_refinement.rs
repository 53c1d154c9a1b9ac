use crate::snapshot_retention::domain::HostName;
use std::path::{Path, PathBuf};

/// One entry of a rule's enumerated probe values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMapping {
    contains: String,
    suffix: String,
}

impl SuffixMapping {
    pub fn new(contains: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            contains: contains.into(),
            suffix: suffix.into(),
        }
    }

    pub fn contains(&self) -> &str {
        &self.contains
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

/// Refinement rule for a single host
///
/// Some machines change their effective OS identity over time (e.g. a
/// multi-boot box). For such a host the rule reads a probe file, usually an
/// OS release marker, and appends the suffix of the first mapping whose
/// pattern occurs in the probe's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRule {
    host: String,
    probe: PathBuf,
    suffixes: Vec<SuffixMapping>,
}

impl LocationRule {
    pub fn new(
        host: impl Into<String>,
        probe: impl Into<PathBuf>,
        suffixes: Vec<SuffixMapping>,
    ) -> Self {
        Self {
            host: host.into(),
            probe: probe.into(),
            suffixes,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn probe(&self) -> &Path {
        &self.probe
    }

    /// Suffix for an observed probe value; `None` when no mapping matches
    pub fn suffix_for(&self, probe_value: &str) -> Option<&str> {
        self.suffixes
            .iter()
            .find(|mapping| probe_value.contains(mapping.contains()))
            .map(SuffixMapping::suffix)
    }
}

/// LocationRefinementPolicy encodes how a host identity maps to its storage
/// directory suffix.
///
/// Rules are consulted in order and the first rule whose host equals the
/// looked-up hostname wins. The default policy has no rules, so every host
/// stores under its plain name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationRefinementPolicy {
    rules: Vec<LocationRule>,
}

impl LocationRefinementPolicy {
    pub fn new(rules: Vec<LocationRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[LocationRule] {
        &self.rules
    }

    pub fn rule_for(&self, host: &HostName) -> Option<&LocationRule> {
        self.rules.iter().find(|rule| rule.host() == host.as_str())
    }
}
