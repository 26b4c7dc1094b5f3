//! Kubernetes API access for node and LoadBalancer listings.

use std::path::Path;

use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Node as KubeNode, Service};
use kube::api::{Api, ListParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use lbnode_common::error::ClusterError;
use lbnode_common::model::{CandidateIp, Node};
use lbnode_common::ports::ClusterMetadata;
use tracing::debug;

use super::filter_by_prefix;

const LOAD_BALANCER: &str = "LoadBalancer";

pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    /// Connects with the credentials of the kubeconfig at `path`.
    pub async fn from_kubeconfig(path: &Path) -> Result<Self, ClusterError> {
        let kubeconfig = Kubeconfig::read_from(path).map_err(|e| ClusterError::Kubeconfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
            .await
            .map_err(|e| ClusterError::Kubeconfig {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let client = Client::try_from(config).map_err(|e| ClusterError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ClusterMetadata for KubeCluster {
    async fn list_nodes(&self) -> Result<Vec<Node>, ClusterError> {
        let api: Api<KubeNode> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|e| ClusterError::ListNodes(e.to_string()))?;

        let nodes: Vec<Node> = list
            .items
            .into_iter()
            .filter_map(|node| node.metadata.name)
            .map(Node::from)
            .collect();

        debug!("Cluster reports {} node(s)", nodes.len());
        Ok(nodes)
    }

    async fn load_balancer_ips(&self, prefix: &str) -> Result<Vec<CandidateIp>, ClusterError> {
        let api: Api<Service> = Api::all(self.client.clone());
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|e| ClusterError::ListServices(e.to_string()))?;

        let ingress = ingress_ips(&list.items);
        debug!("Found {} LoadBalancer ingress address(es)", ingress.len());
        Ok(filter_by_prefix(ingress, prefix))
    }
}

/// Ingress IPs of every `LoadBalancer` service, in listing order.
fn ingress_ips(services: &[Service]) -> Vec<&str> {
    services
        .iter()
        .filter(|svc| {
            svc.spec
                .as_ref()
                .and_then(|spec| spec.type_.as_deref())
                .is_some_and(|kind| kind == LOAD_BALANCER)
        })
        .filter_map(|svc| svc.status.as_ref()?.load_balancer.as_ref()?.ingress.as_ref())
        .flatten()
        .filter_map(|ingress| ingress.ip.as_deref())
        .collect()
}
