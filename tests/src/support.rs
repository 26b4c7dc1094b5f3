use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use lbnode_common::error::{ClusterError, InputError, TransportError};
use lbnode_common::model::{CandidateIp, Node};
use lbnode_common::ports::{ClusterMetadata, CommandOutput, InputSource, RemoteTransport};
use lbnode_core::cluster::filter_by_prefix;

pub struct FakeCluster {
    pub nodes: Vec<&'static str>,
    pub ingress: Vec<&'static str>,
}

#[async_trait]
impl ClusterMetadata for FakeCluster {
    async fn list_nodes(&self) -> Result<Vec<Node>, ClusterError> {
        Ok(self.nodes.iter().copied().map(Node::from).collect())
    }

    async fn load_balancer_ips(&self, prefix: &str) -> Result<Vec<CandidateIp>, ClusterError> {
        Ok(filter_by_prefix(self.ingress.iter().copied(), prefix))
    }
}

/// Cluster whose API is unreachable.
pub struct DownCluster;

#[async_trait]
impl ClusterMetadata for DownCluster {
    async fn list_nodes(&self) -> Result<Vec<Node>, ClusterError> {
        Err(ClusterError::ListNodes("connection refused".into()))
    }

    async fn load_balancer_ips(&self, _prefix: &str) -> Result<Vec<CandidateIp>, ClusterError> {
        Err(ClusterError::ListServices("connection refused".into()))
    }
}

/// Answers prompts from a fixed list and counts how many were asked.
pub struct ScriptedInput {
    answers: VecDeque<&'static str>,
    pub asked: Vec<&'static str>,
}

impl ScriptedInput {
    pub fn new(answers: &[&'static str]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self, field: &'static str) -> Result<String, InputError> {
        self.asked.push(field);
        self.answers.pop_front().map(String::from).ok_or(InputError {
            field,
            reason: "unexpected prompt".into(),
        })
    }
}

impl InputSource for ScriptedInput {
    fn username(&mut self) -> Result<String, InputError> {
        self.next("username")
    }

    fn selection(&mut self) -> Result<String, InputError> {
        self.next("selection")
    }

    fn candidates(&mut self) -> Result<String, InputError> {
        self.next("candidates")
    }
}

/// A recorded remote call: node, user, command, and the inventory text at that moment.
#[derive(Debug, Clone)]
pub struct Call {
    pub node: String,
    pub user: String,
    pub command: String,
    pub inventory: Option<String>,
}

/// Simulated cluster network.
///
/// Discovery answers with `ip -o addr` output naming `interface`; a probe of
/// an address listed in `hosting` for a node fails the way ansible reports a
/// failed `arping`; nodes in `unreachable` fail without the marker.
pub struct SimulatedNetwork {
    pub inventory_path: PathBuf,
    pub interface: &'static str,
    pub hosting: Vec<(&'static str, &'static str)>,
    pub unreachable: Vec<&'static str>,
    pub calls: Mutex<Vec<Call>>,
}

impl SimulatedNetwork {
    pub fn new(inventory_path: PathBuf) -> Self {
        Self {
            inventory_path,
            interface: "bond0.712",
            hosting: Vec::new(),
            unreachable: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn probes(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter(|c| c.command.starts_with("arping"))
            .map(|c| {
                let ip = c.command.split(' ').nth(4).unwrap_or_default().to_string();
                (c.node, ip)
            })
            .collect()
    }
}

#[async_trait]
impl RemoteTransport for SimulatedNetwork {
    async fn execute(
        &self,
        target: &Node,
        username: &str,
        command: &str,
    ) -> Result<CommandOutput, TransportError> {
        self.calls.lock().unwrap().push(Call {
            node: target.to_string(),
            user: username.to_string(),
            command: command.to_string(),
            inventory: std::fs::read_to_string(&self.inventory_path).ok(),
        });

        let node = target.as_str();
        if self.unreachable.iter().any(|n| *n == node) {
            return Ok(CommandOutput::failed(format!(
                "{node} | UNREACHABLE! => {{\"changed\": false, \"unreachable\": true}}"
            )));
        }

        if command.starts_with("ip -o addr") {
            return Ok(CommandOutput::succeeded(format!(
                "{node} | CHANGED | rc=0 >>\n\
                 1: lo    inet 127.0.0.1/8 scope host lo\n\
                 4: {iface}    inet 7.1.2.10/24 brd 7.1.2.255 scope global {iface}\n",
                iface = self.interface
            )));
        }

        let hosts = self
            .hosting
            .iter()
            .any(|(n, ip)| *n == node && command.contains(&format!(" {ip} ")));
        if hosts {
            Ok(CommandOutput::failed(format!("{node} | FAILED | rc=1 >>\nnon-zero return code")))
        } else {
            Ok(CommandOutput::succeeded(format!("{node} | CHANGED | rc=0 >>")))
        }
    }
}
