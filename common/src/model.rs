//! # Run Model
//!
//! Values produced and consumed during a single run. Nothing here outlives the
//! run that created it.

pub mod address;
pub mod interface;
pub mod node;
pub mod outcome;
pub mod selection;

pub use address::CandidateIp;
pub use interface::ProbeInterfaceName;
pub use node::Node;
pub use outcome::{HostingPair, ProbeOutcome, ResultSet};
pub use selection::IpSelection;
