//! Shared vocabulary of the `lbnode` workspace.
//!
//! Holds the domain model of a run (nodes, candidate addresses, probe outcomes),
//! the error types each layer reports, the run [`config::Config`] and the
//! port traits that the core depends on instead of concrete infrastructure.

pub mod config;
pub mod error;
pub mod log;
pub mod model;
pub mod ports;
