//! Resolution of the interface that carries the cluster's floating addresses.
//!
//! Discovery runs one diagnostic command on a designated probe node and hands
//! its output to an [`InterfaceDiscovery`] strategy. Two strategies exist:
//! the [`route`] strategy reads a filtered routing table by line position and
//! the [`address`] strategy maps the first matching address back to its
//! interface. Callers depend on the trait only and pick a strategy from the
//! run configuration with [`from_config`].

use lbnode_common::config::DiscoveryStrategy;
use lbnode_common::error::DiscoveryError;
use lbnode_common::model::{Node, ProbeInterfaceName};
use lbnode_common::ports::RemoteTransport;
use tracing::info;

pub mod address;
pub mod route;

pub use address::AddressScan;
pub use route::RouteTable;

/// A way of finding the probe interface from a node's diagnostic output.
pub trait InterfaceDiscovery: Send + Sync {
    /// Shell command executed on the probe node.
    fn command(&self) -> String;

    /// Extracts the interface name from the command output.
    ///
    /// Must fail rather than return an empty name.
    fn parse(&self, output: &str) -> Result<ProbeInterfaceName, DiscoveryError>;
}

/// Builds the strategy selected by `strategy` for addresses starting with `prefix`.
pub fn from_config(strategy: DiscoveryStrategy, prefix: &str) -> Box<dyn InterfaceDiscovery> {
    match strategy {
        DiscoveryStrategy::RouteTable { line } => Box::new(RouteTable::new(prefix, line)),
        DiscoveryStrategy::AddressScan => Box::new(AddressScan::new(prefix)),
    }
}

pub struct InterfaceResolver<'a> {
    transport: &'a dyn RemoteTransport,
    strategy: &'a dyn InterfaceDiscovery,
}

impl<'a> InterfaceResolver<'a> {
    pub fn new(transport: &'a dyn RemoteTransport, strategy: &'a dyn InterfaceDiscovery) -> Self {
        Self {
            transport,
            strategy,
        }
    }

    /// Runs discovery on the first of `nodes`, the inventory's probe node.
    pub async fn resolve(
        &self,
        nodes: &[Node],
        username: &str,
    ) -> Result<ProbeInterfaceName, DiscoveryError> {
        let probe_node = nodes.first().ok_or(DiscoveryError::NoProbeNode)?;
        let command = self.strategy.command();
        info!("Discovering probe interface on {probe_node} with `{command}`");

        let result = self
            .transport
            .execute(probe_node, username, &command)
            .await
            .map_err(|source| DiscoveryError::Transport {
                node: probe_node.to_string(),
                source,
            })?;

        if !result.success {
            return Err(DiscoveryError::CommandFailed {
                node: probe_node.to_string(),
                output: result.output.trim().to_string(),
            });
        }

        self.strategy.parse(&result.output)
    }
}

/// Escapes `prefix` for use inside a single-quoted awk/grep pattern.
pub(crate) fn regex_literal(prefix: &str) -> String {
    prefix.replace('.', "\\.")
}
