//! The transient inventory the remote transport reads during a run.
//!
//! The artifact is plain text: a `[k8s]` header followed by one
//! `<node> ansible_user=<username>` line per node. It is written atomically
//! (sibling temporary file, then rename) so a reader never observes a partial
//! inventory, and it is removed exactly once when the run ends.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lbnode_common::error::InventoryError;
use lbnode_common::model::Node;
use tempfile::NamedTempFile;
use tracing::{info, warn};

const HEADER: &str = "[k8s]";

pub struct InventoryManager {
    path: PathBuf,
}

impl InventoryManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the inventory for `nodes`, replacing any previous artifact.
    pub fn create(&self, nodes: &[Node], username: &str) -> Result<(), InventoryError> {
        if nodes.is_empty() {
            return Err(InventoryError::NoNodes);
        }

        let contents = render(nodes, username);
        self.write_atomically(contents.as_bytes())
            .map_err(|source| InventoryError::Write {
                path: self.path.clone(),
                source,
            })?;

        info!("Wrote inventory with {} node(s) to {}", nodes.len(), self.path.display());
        Ok(())
    }

    /// Creates the inventory and returns a guard that removes it when dropped.
    pub fn acquire(&self, nodes: &[Node], username: &str) -> Result<InventoryGuard, InventoryError> {
        self.create(nodes, username)?;
        Ok(InventoryGuard {
            manager: InventoryManager::new(self.path.clone()),
            released: false,
        })
    }

    /// Deletes the inventory. A missing artifact is not an error.
    pub fn remove(&self) -> Result<(), InventoryError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed inventory {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(InventoryError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_atomically(&self, contents: &[u8]) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(contents)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Renders the inventory text for `nodes` in the order given.
pub fn render(nodes: &[Node], username: &str) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + nodes.len() * 32);
    out.push_str(HEADER);
    out.push('\n');
    for node in nodes {
        let _ = writeln!(out, "{node} ansible_user={username}");
    }
    out
}

/// Removes the inventory on every exit path.
///
/// Call [`InventoryGuard::release`] to remove it and observe the outcome;
/// otherwise removal happens on drop and failures are only logged.
pub struct InventoryGuard {
    manager: InventoryManager,
    released: bool,
}

impl InventoryGuard {
    pub fn path(&self) -> &Path {
        self.manager.path()
    }

    pub fn release(mut self) -> Result<(), InventoryError> {
        self.released = true;
        self.manager.remove()
    }
}

impl Drop for InventoryGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.manager.remove() {
            warn!("{e}");
        }
    }
}
