//! Error types reported by each layer of a run.
//!
//! Lower layers never decide whether a failure is fatal; they return one of
//! these and the session (or the binary) decides.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failure to execute a command on a remote node at all.
///
/// A command that ran and exited non-zero is not a `TransportError`; it is
/// reported through [`crate::ports::CommandOutput::success`].
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("command on {target} did not finish within {}s", after.as_secs())]
    Timeout { target: String, after: Duration },
}

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("refusing to write an inventory without nodes")]
    NoNodes,

    #[error("failed to write inventory {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove inventory {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("no node available to run interface discovery on")]
    NoProbeNode,

    #[error("interface discovery could not reach {node}: {source}")]
    Transport {
        node: String,
        #[source]
        source: TransportError,
    },

    #[error("interface discovery command failed on {node}: {output}")]
    CommandFailed { node: String, output: String },

    #[error("no network interface matches prefix '{prefix}'")]
    NoMatch { prefix: String },

    #[error("discovered interface name is empty")]
    EmptyName,

    #[error("discovered interface name '{0}' is not a valid interface name")]
    InvalidName(String),
}

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("failed to load kubeconfig {}: {reason}", path.display())]
    Kubeconfig { path: PathBuf, reason: String },

    #[error("failed to create Kubernetes client: {0}")]
    Client(String),

    #[error("failed to list nodes: {0}")]
    ListNodes(String),

    #[error("failed to list services: {0}")]
    ListServices(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid option '{0}', please choose 'yes' or 'no'")]
    InvalidChoice(String),

    #[error("'{0}' is not an IP address")]
    InvalidAddress(String),
}

#[derive(Error, Debug)]
#[error("failed to read {field}: {reason}")]
pub struct InputError {
    pub field: &'static str,
    pub reason: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key}: '{value}' is not a discovery strategy (expected route[:<line>] or address)")]
    Discovery { key: &'static str, value: String },

    #[error("{key}: '{value}' is not a number of seconds")]
    Timeout { key: &'static str, value: String },

    #[error("{key}: '{value}' is not an address prefix")]
    Prefix { key: &'static str, value: String },

    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Any failure that aborts a run.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Cluster(#[from] ClusterError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}
