use super::SnapshotKind;
use crate::shared::Result;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use std::fmt;

/// Common prefix of every snapshot file
pub const SNAPSHOT_PREFIX: &str = "rpmsnap";

/// Appended to a snapshot name while the run is still deciding its fate
pub const PROVISIONAL_SUFFIX: &str = ".new";

/// Timestamp layout embedded in file names.
///
/// Zero-padded, most significant field first: lexicographic order of the
/// labels equals chronological order, which is what latest selection relies on.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// NewType wrapper for the timestamp label of one run
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampLabel(String);

impl TimestampLabel {
    pub fn from_datetime<Tz>(datetime: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self(datetime.format(TIMESTAMP_FORMAT).to_string())
    }

    /// Label for the current local time
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// Parses a label, rejecting anything that would break the ordering invariant
    /// (e.g. missing zero padding).
    pub fn parse(label: &str) -> Result<Self> {
        let parsed = NaiveDateTime::parse_from_str(label, TIMESTAMP_FORMAT).map_err(|e| {
            anyhow::anyhow!(
                "Invalid snapshot timestamp '{}': {}. Expected layout YYYY-MM-DD_HH:MM:SS",
                label,
                e
            )
        })?;

        let canonical = parsed.format(TIMESTAMP_FORMAT).to_string();
        if canonical != label {
            anyhow::bail!(
                "Invalid snapshot timestamp '{}': not in canonical form '{}'",
                label,
                canonical
            );
        }

        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimestampLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// File name of one snapshot: `rpmsnap.<timestamp>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotName {
    kind: SnapshotKind,
    timestamp: TimestampLabel,
}

impl SnapshotName {
    pub fn new(kind: SnapshotKind, timestamp: TimestampLabel) -> Self {
        Self { kind, timestamp }
    }

    pub fn kind(&self) -> SnapshotKind {
        self.kind
    }

    /// Name the snapshot carries once retained
    pub fn final_file_name(&self) -> String {
        format!(
            "{}.{}.{}",
            SNAPSHOT_PREFIX,
            self.timestamp,
            self.kind.extension()
        )
    }

    /// Name the snapshot carries while the run decides whether to keep it
    pub fn provisional_file_name(&self) -> String {
        format!("{}{}", self.final_file_name(), PROVISIONAL_SUFFIX)
    }

    /// Whether `file_name` is a retained snapshot of `kind`.
    ///
    /// Equivalent to the glob `rpmsnap.*.<ext>`; provisional files never match.
    pub fn matches_retained(kind: SnapshotKind, file_name: &str) -> bool {
        file_name
            .strip_prefix(SNAPSHOT_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .and_then(|rest| rest.strip_suffix(kind.extension()))
            .is_some_and(|rest| rest.ends_with('.'))
    }
}
