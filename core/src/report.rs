//! Tabulation of a finished sweep for the presentation layer.

use lbnode_common::model::ResultSet;

pub const HEADERS: [&str; 2] = ["Node Name", "LoadBalancer IP"];

/// Two-column rows, one per hosting pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: [&'static str; 2],
    pub rows: Vec<[String; 2]>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Turns `results` into rows, keeping probe order.
pub fn tabulate(results: &ResultSet) -> Table {
    let rows = results
        .iter()
        .map(|pair| [pair.node.to_string(), pair.candidate.to_string()])
        .collect();

    Table {
        headers: HEADERS,
        rows,
    }
}
