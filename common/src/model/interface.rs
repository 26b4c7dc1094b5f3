use std::fmt;

use crate::error::DiscoveryError;

/// Name of the local interface used for every ARP probe of a run.
///
/// An empty name is never a valid interface: construction fails instead of
/// handing an empty string to the probe command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeInterfaceName(String);

impl ProbeInterfaceName {
    pub fn new(name: &str) -> Result<Self, DiscoveryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DiscoveryError::EmptyName);
        }
        if !name.chars().all(is_interface_char) {
            return Err(DiscoveryError::InvalidName(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_interface_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')
}

impl fmt::Display for ProbeInterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
