use crate::shared::Result;
use std::path::Path;

/// HostProbe port for reading the local system identity
///
/// This port abstracts the hostname lookup and the environment probe used
/// by location refinement rules.
pub trait HostProbe {
    /// Returns the hostname of the machine
    ///
    /// # Errors
    /// Returns an error if no lookup strategy yields a non-empty name
    fn hostname(&self) -> Result<String>;

    /// Reads the content of an environment probe file (e.g. an OS release marker)
    ///
    /// # Errors
    /// Returns an error if the probe cannot be read
    fn read_probe(&self, path: &Path) -> Result<String>;
}
