use super::SnapshotName;
use crate::shared::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Maximum length for a hostname (RFC 1035 limit for a full name)
const MAX_HOSTNAME_LENGTH: usize = 253;

/// NewType wrapper for a host identity with validation
///
/// The name becomes a directory component, so anything that could escape
/// the data root is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostName(String);

impl HostName {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();

        if name.is_empty() {
            anyhow::bail!("Hostname cannot be empty");
        }

        if name.len() > MAX_HOSTNAME_LENGTH {
            anyhow::bail!(
                "Hostname is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_HOSTNAME_LENGTH
            );
        }

        if name == "." || name == ".." {
            anyhow::bail!("Hostname cannot be '.' or '..'");
        }

        if name.contains(['/', '\\', '\0']) {
            anyhow::bail!("Hostname contains a path separator or NUL byte");
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directory holding the retained snapshots of one host: `<data-root>/<host><suffix>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    directory: PathBuf,
    host: HostName,
    suffix: Option<String>,
}

impl StorageLocation {
    pub fn new(data_root: &Path, host: HostName, suffix: Option<String>) -> Self {
        let dir_name = match &suffix {
            Some(suffix) => format!("{}{}", host, suffix),
            None => host.to_string(),
        };

        Self {
            directory: data_root.join(dir_name),
            host,
            suffix,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn host(&self) -> &HostName {
        &self.host
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn final_path(&self, name: &SnapshotName) -> PathBuf {
        self.directory.join(name.final_file_name())
    }

    pub fn provisional_path(&self, name: &SnapshotName) -> PathBuf {
        self.directory.join(name.provisional_file_name())
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.directory.display())
    }
}
