use crate::ports::outbound::HostProbe;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

const KERNEL_HOSTNAME_PATH: &str = "/proc/sys/kernel/hostname";
const HOSTNAME_PROGRAM: &str = "hostname";

/// SystemHostProbe adapter reading identity from the running system
///
/// The hostname comes from the kernel (`/proc/sys/kernel/hostname`) and
/// falls back to the `hostname` command where procfs is unavailable.
pub struct SystemHostProbe {
    kernel_hostname_path: PathBuf,
}

impl SystemHostProbe {
    pub fn new() -> Self {
        Self {
            kernel_hostname_path: PathBuf::from(KERNEL_HOSTNAME_PATH),
        }
    }

    fn hostname_from_kernel(&self) -> Option<String> {
        let name = fs::read_to_string(&self.kernel_hostname_path).ok()?;
        non_empty(name)
    }

    fn hostname_from_command() -> Result<String> {
        let output = Command::new(HOSTNAME_PROGRAM)
            .output()
            .with_context(|| format!("Failed to run '{}'", HOSTNAME_PROGRAM))?;

        if !output.status.success() {
            anyhow::bail!(
                "'{}' exited with {}: {}",
                HOSTNAME_PROGRAM,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        non_empty(String::from_utf8_lossy(&output.stdout).into_owned())
            .ok_or_else(|| anyhow::anyhow!("'{}' printed an empty name", HOSTNAME_PROGRAM))
    }
}

impl Default for SystemHostProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(name: String) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl HostProbe for SystemHostProbe {
    fn hostname(&self) -> Result<String> {
        if let Some(name) = self.hostname_from_kernel() {
            debug!(hostname = %name, source = KERNEL_HOSTNAME_PATH, "hostname resolved");
            return Ok(name);
        }

        let name = Self::hostname_from_command()?;
        debug!(hostname = %name, source = HOSTNAME_PROGRAM, "hostname resolved");
        Ok(name)
    }

    fn read_probe(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read probe file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hostname_from_kernel_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hostname");
        fs::write(&path, "yggdrasil\n").unwrap();

        let probe = SystemHostProbe {
            kernel_hostname_path: path,
        };
        assert_eq!(probe.hostname().unwrap(), "yggdrasil");
    }

    #[test]
    fn test_blank_kernel_file_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("hostname");
        fs::write(&path, "  \n").unwrap();

        let probe = SystemHostProbe {
            kernel_hostname_path: path,
        };
        assert!(probe.hostname_from_kernel().is_none());
    }

    #[test]
    fn test_read_probe() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("redhat-release");
        fs::write(&path, "Fedora release 18 (Spherical Cow)\n").unwrap();

        let probe = SystemHostProbe::new();
        assert_eq!(
            probe.read_probe(&path).unwrap(),
            "Fedora release 18 (Spherical Cow)\n"
        );
    }

    #[test]
    fn test_read_missing_probe() {
        let probe = SystemHostProbe::new();
        let err = probe
            .read_probe(Path::new("/nonexistent/os-release"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read probe file"));
    }
}
