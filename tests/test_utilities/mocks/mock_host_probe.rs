use rpmsnap::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock HostProbe for testing
pub struct MockHostProbe {
    pub hostname: Option<String>,
    pub probes: HashMap<PathBuf, String>,
}

impl MockHostProbe {
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: Some(hostname.to_string()),
            probes: HashMap::new(),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            hostname: None,
            probes: HashMap::new(),
        }
    }

    pub fn with_probe(mut self, path: &str, content: &str) -> Self {
        self.probes.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl HostProbe for MockHostProbe {
    fn hostname(&self) -> Result<String> {
        match &self.hostname {
            Some(name) => Ok(name.clone()),
            None => anyhow::bail!("Mock hostname lookup failure"),
        }
    }

    fn read_probe(&self, path: &Path) -> Result<String> {
        match self.probes.get(path) {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Mock probe not found: {}", path.display()),
        }
    }
}
