//! Remote execution through ad-hoc `ansible` shell commands.
//!
//! Every call runs `ansible -i <inventory> <node> -u <user> -m shell -a <cmd>`
//! and reports ansible's exit status together with its combined output. The
//! inventory must exist for as long as the transport is used.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use lbnode_common::error::TransportError;
use lbnode_common::model::Node;
use lbnode_common::ports::{CommandOutput, RemoteTransport};
use tokio::process::Command;

pub struct AnsibleTransport {
    program: String,
    inventory: PathBuf,
}

impl AnsibleTransport {
    pub fn new(program: impl Into<String>, inventory: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            inventory: inventory.into(),
        }
    }

    fn command(&self, target: &Node, username: &str, command: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-i")
            .arg(&self.inventory)
            .arg(target.as_str())
            .args(["-u", username])
            .args(["-m", "shell", "-a", command])
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl RemoteTransport for AnsibleTransport {
    async fn execute(
        &self,
        target: &Node,
        username: &str,
        command: &str,
    ) -> Result<CommandOutput, TransportError> {
        let output = self
            .command(target, username, command)
            .output()
            .await
            .map_err(|source| TransportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            success: output.status.success(),
            output: combined,
        })
    }
}
