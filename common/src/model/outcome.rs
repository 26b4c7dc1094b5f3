use crate::model::{CandidateIp, Node};

/// Text the remote transport prints when the probed command exits non-zero.
///
/// This is a heuristic inherited from how ansible reports a failed `arping`,
/// not a network-level guarantee that the node answers for the address.
pub const HOSTING_MARKER: &str = "FAILED";

/// Classification of one (node, candidate) probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The probe failed and its output carries [`HOSTING_MARKER`].
    Hosting,
    /// The probe succeeded.
    NotHosting,
    /// The probe failed for any other reason, or never ran.
    TransportError,
}

impl ProbeOutcome {
    /// Classifies a completed probe from its exit signal and combined output.
    pub fn classify(success: bool, output: &str) -> Self {
        match (success, output.contains(HOSTING_MARKER)) {
            (true, _) => ProbeOutcome::NotHosting,
            (false, true) => ProbeOutcome::Hosting,
            (false, false) => ProbeOutcome::TransportError,
        }
    }

    pub fn is_hosting(self) -> bool {
        self == ProbeOutcome::Hosting
    }
}

/// A node that answers for a candidate address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostingPair {
    pub node: Node,
    pub candidate: CandidateIp,
}

/// Hosting pairs in the order they were probed.
///
/// Entries are appended as probes complete and never re-sorted or
/// deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pairs: Vec<HostingPair>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `outcome` for the pair, keeping it only when it is hosting.
    pub fn record(&mut self, node: &Node, candidate: &CandidateIp, outcome: ProbeOutcome) {
        if outcome.is_hosting() {
            self.pairs.push(HostingPair {
                node: node.clone(),
                candidate: candidate.clone(),
            });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostingPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = HostingPair;
    type IntoIter = std::vec::IntoIter<HostingPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}
