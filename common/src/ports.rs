//! # Ports
//!
//! Traits the core depends on instead of concrete infrastructure. The real
//! implementations live in `lbnode-core` (remote transport, Kubernetes) and
//! `lbnode-cli` (terminal prompts); tests substitute scripted fakes.

pub mod cluster;
pub mod input;
pub mod transport;

pub use cluster::ClusterMetadata;
pub use input::InputSource;
pub use transport::{CommandOutput, RemoteTransport};
