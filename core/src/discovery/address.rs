use lbnode_common::error::DiscoveryError;
use lbnode_common::model::ProbeInterfaceName;

use super::InterfaceDiscovery;

/// Picks the interface owning the first address that starts with the prefix.
///
/// Reads the one-line-per-address output of `ip -o addr show`:
///
/// ```text
/// 4: bond0.712    inet 7.1.2.10/24 brd 7.1.2.255 scope global bond0.712\       valid_lft forever
/// ```
pub struct AddressScan {
    prefix: String,
}

impl AddressScan {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let mut fields = line.split_whitespace();
        let _index = fields.next()?;
        let name = fields.next()?;
        let family = fields.next()?;
        let address = fields.next()?;

        if !matches!(family, "inet" | "inet6") || !address.starts_with(&self.prefix) {
            return None;
        }

        // vlan links are printed as `child@parent`; probes need the child.
        Some(name.split('@').next().unwrap_or(name))
    }
}

impl InterfaceDiscovery for AddressScan {
    fn command(&self) -> String {
        String::from("ip -o addr show")
    }

    fn parse(&self, output: &str) -> Result<ProbeInterfaceName, DiscoveryError> {
        let name = output
            .lines()
            .find_map(|line| self.match_line(line))
            .ok_or_else(|| DiscoveryError::NoMatch {
                prefix: self.prefix.clone(),
            })?;

        ProbeInterfaceName::new(name)
    }
}
