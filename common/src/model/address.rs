use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::SelectionError;

/// A LoadBalancer address to probe.
///
/// The textual form is kept exactly as it was supplied (minus surrounding
/// whitespace) because it is passed verbatim to the remote probe command. It
/// is still required to parse as an IPv4 or IPv6 address so that nothing but
/// an address ever reaches a remote shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateIp(String);

impl CandidateIp {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the textual address begins with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Parses a comma-separated list such as `"7.1.2.3, 7.5.5.5"`.
    ///
    /// Entries are trimmed and empty entries are dropped, so a trailing comma
    /// or an empty line yields fewer candidates rather than an error.
    pub fn parse_list(input: &str) -> Result<Vec<CandidateIp>, SelectionError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(CandidateIp::from_str)
            .collect()
    }
}

impl FromStr for CandidateIp {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<IpAddr>()
            .map_err(|_| SelectionError::InvalidAddress(trimmed.to_string()))?;
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for CandidateIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
