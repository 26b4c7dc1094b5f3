use std::str::FromStr;

use crate::error::SelectionError;

/// How the candidate addresses of a run are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpSelection {
    /// Every LoadBalancer ingress address that starts with the configured prefix.
    Auto,
    /// A comma-separated list typed by the operator.
    Manual,
}

impl FromStr for IpSelection {
    type Err = SelectionError;

    /// Accepts exactly `yes` or `no`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "yes" => Ok(IpSelection::Auto),
            "no" => Ok(IpSelection::Manual),
            other => Err(SelectionError::InvalidChoice(other.to_string())),
        }
    }
}
