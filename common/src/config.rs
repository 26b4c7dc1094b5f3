use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_INVENTORY: &str = "LBNODE_INVENTORY";
pub const ENV_PREFIX: &str = "LBNODE_PREFIX";
pub const ENV_DISCOVERY: &str = "LBNODE_DISCOVERY";
pub const ENV_PROBE_TIMEOUT: &str = "LBNODE_PROBE_TIMEOUT";
pub const ENV_ANSIBLE: &str = "LBNODE_ANSIBLE";

/// Output line of `ip route | awk ... | head -2` that names the interface.
///
/// Line 0 is the transport's status header, so line 2 is the second route.
pub const DEFAULT_ROUTE_LINE: usize = 2;

pub struct Config {
    /// Where the transient inventory is written for the duration of the run.
    pub inventory_path: PathBuf,
    /// Leading characters shared by every floating address of the cluster.
    ///
    /// Selects both the probe interface and the auto-discovered candidates.
    pub ip_prefix: String,
    /// How the probe interface is discovered on the first node.
    pub discovery: DiscoveryStrategy,
    /// Upper bound for a single remote command. `None` waits forever.
    pub probe_timeout: Option<Duration>,
    /// Program used as the remote transport.
    pub ansible_program: String,
    /// Render without colors.
    pub plain: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from("k8s.inventory"),
            ip_prefix: String::from("7"),
            discovery: DiscoveryStrategy::RouteTable {
                line: DEFAULT_ROUTE_LINE,
            },
            probe_timeout: None,
            ansible_program: String::from("ansible"),
            plain: false,
        }
    }
}

impl Config {
    /// Applies `LBNODE_*` overrides read through `lookup`.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_INVENTORY) {
            self.inventory_path = PathBuf::from(non_empty(ENV_INVENTORY, path)?);
        }
        if let Some(prefix) = lookup(ENV_PREFIX) {
            let prefix = non_empty(ENV_PREFIX, prefix)?;
            if !prefix.chars().all(|c| c.is_ascii_hexdigit() || c == '.' || c == ':') {
                return Err(ConfigError::Prefix {
                    key: ENV_PREFIX,
                    value: prefix,
                });
            }
            self.ip_prefix = prefix;
        }
        if let Some(strategy) = lookup(ENV_DISCOVERY) {
            self.discovery = strategy.parse().map_err(|_| ConfigError::Discovery {
                key: ENV_DISCOVERY,
                value: strategy,
            })?;
        }
        if let Some(secs) = lookup(ENV_PROBE_TIMEOUT) {
            let parsed: u64 = secs.trim().parse().map_err(|_| ConfigError::Timeout {
                key: ENV_PROBE_TIMEOUT,
                value: secs.clone(),
            })?;
            self.probe_timeout = (parsed > 0).then(|| Duration::from_secs(parsed));
        }
        if let Some(program) = lookup(ENV_ANSIBLE) {
            self.ansible_program = non_empty(ENV_ANSIBLE, program)?;
        }
        Ok(self)
    }
}

fn non_empty(key: &'static str, value: String) -> Result<String, ConfigError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(ConfigError::Empty { key });
    }
    Ok(value)
}

/// Rule used to find the probe interface in the output of a diagnostic command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStrategy {
    /// Take the output line at `line` of a filtered routing table.
    RouteTable { line: usize },
    /// Take the interface owning the first address that starts with the prefix.
    AddressScan,
}

impl FromStr for DiscoveryStrategy {
    type Err = ();

    /// Parses `address`, `route` or `route:<line>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':').map(|(name, line)| (name.trim(), line.trim())) {
            None if s == "address" => Ok(DiscoveryStrategy::AddressScan),
            None if s == "route" => Ok(DiscoveryStrategy::RouteTable {
                line: DEFAULT_ROUTE_LINE,
            }),
            Some(("route", line)) => line
                .parse()
                .map(|line| DiscoveryStrategy::RouteTable { line })
                .map_err(|_| ()),
            _ => Err(()),
        }
    }
}
