//! Cluster metadata adapters and the address filter they share.

pub mod kubernetes;

pub use kubernetes::KubeCluster;

use lbnode_common::model::CandidateIp;
use tracing::warn;

/// Keeps the addresses that start with `prefix`, in listing order.
///
/// Entries that are not IP addresses are skipped with a warning.
pub fn filter_by_prefix<'a, I>(addresses: I, prefix: &str) -> Vec<CandidateIp>
where
    I: IntoIterator<Item = &'a str>,
{
    addresses
        .into_iter()
        .filter_map(|addr| match addr.parse::<CandidateIp>() {
            Ok(ip) => Some(ip),
            Err(e) => {
                warn!("Skipping LoadBalancer ingress: {e}");
                None
            }
        })
        .filter(|ip| ip.has_prefix(prefix))
        .collect()
}
