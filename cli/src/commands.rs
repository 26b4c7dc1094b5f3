pub mod locate;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use lbnode_common::config::Config;

#[derive(Parser)]
#[command(name = "lbnode")]
#[command(version)]
#[command(about = "Find the cluster node that answers ARP for your LoadBalancer IPs.")]
pub struct CommandLine {
    /// Path to the kubeconfig file [default: ~/.kube/config]
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Print more details (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings, errors and the result
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Applies the flags that tune `cfg`.
    pub fn configure(&self, mut cfg: Config) -> Config {
        cfg.plain |= self.plain;
        cfg
    }

    /// The kubeconfig to load, falling back to `~/.kube/config`.
    pub fn kubeconfig_path(&self) -> Option<PathBuf> {
        self.kubeconfig
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(".kube").join("config")))
    }
}
