use lbnode_common::error::DiscoveryError;
use lbnode_common::model::ProbeInterfaceName;

use super::{InterfaceDiscovery, regex_literal};

/// Picks the interface from a filtered routing table by line position.
///
/// The command keeps the third column of every route mentioning the prefix,
/// limited to two routes. The transport prepends a status line, so the
/// default position (2) is the second matching route.
pub struct RouteTable {
    prefix: String,
    line: usize,
}

impl RouteTable {
    pub fn new(prefix: &str, line: usize) -> Self {
        Self {
            prefix: prefix.to_string(),
            line,
        }
    }
}

impl InterfaceDiscovery for RouteTable {
    fn command(&self) -> String {
        format!(
            "ip route | awk '/{}/ {{print $3}}' | head -2",
            regex_literal(&self.prefix)
        )
    }

    fn parse(&self, output: &str) -> Result<ProbeInterfaceName, DiscoveryError> {
        let candidate = output
            .trim()
            .lines()
            .nth(self.line)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .ok_or_else(|| DiscoveryError::NoMatch {
                prefix: self.prefix.clone(),
            })?;

        ProbeInterfaceName::new(candidate)
    }
}
