//! The node-resolution engine.
//!
//! A run materializes a throwaway [`inventory`] of the cluster nodes, resolves
//! the interface that carries the floating addresses with a
//! [`discovery`] strategy, sends one ARP [`probe`] per (node, address) pair and
//! collects the nodes that answer into a [`report`]. [`session::Session`]
//! sequences all of it; [`transport`] and [`cluster`] hold the concrete
//! adapters behind the ports defined in `lbnode-common`.

pub mod cluster;
pub mod discovery;
pub mod inventory;
pub mod probe;
pub mod report;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;
