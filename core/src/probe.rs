//! Sequential ARP probing of every (node, candidate) pair.
//!
//! One `arping` runs per pair, nodes in the outer loop and candidates in the
//! inner loop, and each probe finishes before the next starts. A probe that
//! cannot run or fails without the hosting marker never stops the sweep.

use std::time::Duration;

use lbnode_common::error::TransportError;
use lbnode_common::model::{CandidateIp, Node, ProbeInterfaceName, ProbeOutcome, ResultSet};
use lbnode_common::ports::RemoteTransport;
use tracing::{debug, trace};

/// Shell command sending a single ARP request for `candidate` out of `interface`.
pub fn probe_command(interface: &ProbeInterfaceName, candidate: &CandidateIp) -> String {
    format!("arping -q -I {interface} {candidate} -c 1")
}

pub struct ProbeOrchestrator<'a> {
    transport: &'a dyn RemoteTransport,
    timeout: Option<Duration>,
}

impl<'a> ProbeOrchestrator<'a> {
    pub fn new(transport: &'a dyn RemoteTransport) -> Self {
        Self {
            transport,
            timeout: None,
        }
    }

    /// Bounds every probe; a probe that exceeds it counts as a transport error.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn run(
        &self,
        nodes: &[Node],
        interface: &ProbeInterfaceName,
        candidates: &[CandidateIp],
        username: &str,
    ) -> ResultSet {
        let total = nodes.len() * candidates.len();
        let mut results = ResultSet::new();
        let mut done = 0;

        for node in nodes {
            for candidate in candidates {
                let outcome = self.probe(node, interface, candidate, username).await;
                done += 1;
                debug!("[{done}/{total}] {node} -> {candidate}: {outcome:?}");
                results.record(node, candidate, outcome);
            }
        }

        results
    }

    async fn probe(
        &self,
        node: &Node,
        interface: &ProbeInterfaceName,
        candidate: &CandidateIp,
        username: &str,
    ) -> ProbeOutcome {
        let command = probe_command(interface, candidate);
        let execution = self.transport.execute(node, username, &command);

        let result = match self.timeout {
            Some(after) => match tokio::time::timeout(after, execution).await {
                Ok(result) => result,
                Err(_) => Err(TransportError::Timeout {
                    target: node.to_string(),
                    after,
                }),
            },
            None => execution.await,
        };

        match result {
            Ok(output) => {
                trace!("{node}: {}", output.output.trim());
                ProbeOutcome::classify(output.success, &output.output)
            }
            Err(e) => {
                trace!("{node}: {e}");
                ProbeOutcome::TransportError
            }
        }
    }
}
