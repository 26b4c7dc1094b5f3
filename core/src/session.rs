//! # Node Resolution Session
//!
//! Implements the one use case of the tool: find which nodes answer ARP for a
//! set of LoadBalancer addresses.
//!
//! A run has two phases so the caller can wrap the slow part in a progress
//! indicator:
//! 1. [`Session::prepare`] asks the operator for a username and an address
//!    selection and reads the node list from the cluster. Nothing is written
//!    during this phase, so an invalid answer leaves no artifact behind.
//! 2. [`Session::execute`] writes the inventory, resolves the probe interface,
//!    probes every pair and removes the inventory again.

use std::time::Duration;

use lbnode_common::config::Config;
use lbnode_common::error::{InputError, InventoryError, SessionError};
use lbnode_common::model::{CandidateIp, IpSelection, Node, ProbeInterfaceName, ResultSet};
use lbnode_common::ports::{ClusterMetadata, InputSource, RemoteTransport};
use tracing::{debug, info, warn};

use crate::discovery::{self, InterfaceDiscovery, InterfaceResolver};
use crate::inventory::InventoryManager;
use crate::probe::ProbeOrchestrator;

/// Everything a sweep needs, gathered before anything touches the disk.
#[derive(Debug, Clone)]
pub struct Plan {
    pub username: String,
    pub nodes: Vec<Node>,
    pub candidates: Vec<CandidateIp>,
}

impl Plan {
    pub fn probe_count(&self) -> usize {
        self.nodes.len() * self.candidates.len()
    }
}

/// Outcome of a completed sweep.
#[derive(Debug)]
pub struct Report {
    pub interface: ProbeInterfaceName,
    pub results: ResultSet,
    /// Result of removing the inventory. A failure here never invalidates
    /// `results`; callers report it after presenting them.
    pub teardown: Result<(), InventoryError>,
}

pub struct Session<'a> {
    cluster: &'a dyn ClusterMetadata,
    transport: &'a dyn RemoteTransport,
    discovery: Box<dyn InterfaceDiscovery>,
    inventory: InventoryManager,
    ip_prefix: String,
    probe_timeout: Option<Duration>,
}

impl<'a> Session<'a> {
    pub fn new(
        cfg: &Config,
        cluster: &'a dyn ClusterMetadata,
        transport: &'a dyn RemoteTransport,
    ) -> Self {
        Self {
            cluster,
            transport,
            discovery: discovery::from_config(cfg.discovery, &cfg.ip_prefix),
            inventory: InventoryManager::new(cfg.inventory_path.clone()),
            ip_prefix: cfg.ip_prefix.clone(),
            probe_timeout: cfg.probe_timeout,
        }
    }

    /// Replaces the interface discovery strategy chosen from the config.
    pub fn with_discovery(mut self, discovery: Box<dyn InterfaceDiscovery>) -> Self {
        self.discovery = discovery;
        self
    }

    pub async fn prepare(&self, input: &mut dyn InputSource) -> Result<Plan, SessionError> {
        let username = validate_username(input.username()?)?;
        let nodes = self.cluster.list_nodes().await?;
        info!("Found {} node(s) in the cluster", nodes.len());

        let selection: IpSelection = input.selection()?.parse()?;
        let candidates = match selection {
            IpSelection::Auto => self.cluster.load_balancer_ips(&self.ip_prefix).await?,
            IpSelection::Manual => CandidateIp::parse_list(&input.candidates()?)?,
        };

        if candidates.is_empty() {
            warn!("No LoadBalancer IPs to probe");
        } else {
            info!("Probing {} LoadBalancer IP(s)", candidates.len());
        }

        Ok(Plan {
            username,
            nodes,
            candidates,
        })
    }

    pub async fn execute(&self, plan: &Plan) -> Result<Report, SessionError> {
        let inventory = self.inventory.acquire(&plan.nodes, &plan.username)?;

        let resolver = InterfaceResolver::new(self.transport, self.discovery.as_ref());
        let interface = resolver.resolve(&plan.nodes, &plan.username).await?;
        info!("Probing through interface {interface}");

        let results = ProbeOrchestrator::new(self.transport)
            .with_timeout(self.probe_timeout)
            .run(&plan.nodes, &interface, &plan.candidates, &plan.username)
            .await;
        debug!("{} of {} probe(s) found a hosting node", results.len(), plan.probe_count());

        Ok(Report {
            interface,
            results,
            teardown: inventory.release(),
        })
    }

    /// Runs both phases back to back.
    pub async fn run(&self, input: &mut dyn InputSource) -> Result<Report, SessionError> {
        let plan = self.prepare(input).await?;
        self.execute(&plan).await
    }
}

fn validate_username(raw: String) -> Result<String, InputError> {
    let username = raw.trim();
    let reason = if username.is_empty() {
        "must not be empty"
    } else if username.chars().any(char::is_whitespace) {
        "must not contain whitespace"
    } else {
        return Ok(username.to_string());
    };

    Err(InputError {
        field: "username",
        reason: reason.to_string(),
    })
}
