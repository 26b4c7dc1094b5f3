use async_trait::async_trait;

use crate::error::TransportError;
use crate::model::Node;

/// Result of a command that ran on a remote node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the transport reported the command as successful.
    pub success: bool,
    /// Combined stdout and stderr.
    pub output: String,
}

impl CommandOutput {
    pub fn succeeded(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
        }
    }

    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
        }
    }
}

/// Executes a shell command on a named remote node as a named user.
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    async fn execute(
        &self,
        target: &Node,
        username: &str,
        command: &str,
    ) -> Result<CommandOutput, TransportError>;
}
