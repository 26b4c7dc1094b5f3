use async_trait::async_trait;

use crate::error::ClusterError;
use crate::model::{CandidateIp, Node};

/// Read-only view of the cluster a run probes.
#[async_trait]
pub trait ClusterMetadata: Send + Sync {
    /// Every node of the cluster, in the order the cluster lists them.
    async fn list_nodes(&self) -> Result<Vec<Node>, ClusterError>;

    /// Ingress addresses of `LoadBalancer` services that begin with `prefix`.
    async fn load_balancer_ips(&self, prefix: &str) -> Result<Vec<CandidateIp>, ClusterError>;
}
