use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lbnode_common::error::TransportError;
use lbnode_common::model::Node;
use lbnode_common::ports::{CommandOutput, RemoteTransport};
use tracing::Level;
use tracing::subscriber::DefaultGuard;

type Script = Box<dyn Fn(&Node, &str) -> Result<CommandOutput, TransportError> + Send + Sync>;

/// Transport that answers from a closure and remembers every call.
pub struct ScriptedTransport {
    script: Script,
    pub calls: Mutex<Vec<(String, String, String)>>,
}

impl ScriptedTransport {
    pub fn new<F>(script: F) -> Self
    where
        F: Fn(&Node, &str) -> Result<CommandOutput, TransportError> + Send + Sync + 'static,
    {
        Self {
            script: Box::new(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteTransport for ScriptedTransport {
    async fn execute(
        &self,
        target: &Node,
        username: &str,
        command: &str,
    ) -> Result<CommandOutput, TransportError> {
        self.calls.lock().unwrap().push((
            target.to_string(),
            username.to_string(),
            command.to_string(),
        ));
        (self.script)(target, command)
    }
}

/// Log lines captured by [`capture_logs`].
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records events at `level` and above on the current thread until the guard drops.
pub fn capture_logs(level: Level) -> (DefaultGuard, CapturedLogs) {
    let logs = CapturedLogs::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .without_time()
        .with_writer(move || sink.clone())
        .finish();
    (tracing::subscriber::set_default(subscriber), logs)
}
