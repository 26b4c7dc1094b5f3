//! Concrete remote transports.

pub mod ansible;

pub use ansible::AnsibleTransport;
